//! Wallet domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use wallet_shared::types::{TransactionId, UserId};

use super::error::WalletError;

/// Number of ledger entries shown alongside a user's profile.
pub const RECENT_ENTRIES: u64 = 10;

/// Decimal places kept by the `balance` and `amount` columns.
pub const AMOUNT_SCALE: u32 = 4;

/// Largest balance the `decimal(16, 4)` columns can hold: `999_999_999_999.9999`.
pub const MAX_BALANCE: Decimal =
    Decimal::from_parts(0x6FC0_FFFF, 0x0023_86F2, 0, false, AMOUNT_SCALE);

/// Ledger entry type, named from the wallet owner's point of view.
///
/// - `Debit`: money entering the wallet (a receive)
/// - `Credit`: money leaving the wallet (a disburse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money leaving the wallet.
    Credit,
    /// Money entering the wallet.
    Debit,
}

impl TransactionType {
    /// Returns the stored representation (`"CREDIT"` / `"DEBIT"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "CREDIT",
            Self::Debit => "DEBIT",
        }
    }

    /// Applies the sign this entry type has on a balance.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Debit => amount,
            Self::Credit => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    /// Parses the exact uppercase tag; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CREDIT" => Ok(Self::Credit),
            "DEBIT" => Ok(Self::Debit),
            _ => Err(format!("Invalid transaction type: {s}")),
        }
    }
}

/// A monetary amount strictly greater than zero with at most
/// [`AMOUNT_SCALE`] decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PositiveAmount(Decimal);

impl PositiveAmount {
    /// Wraps `amount` if it is greater than zero and fits the stored scale.
    ///
    /// Trailing zeros do not count towards the scale, so `1.50000` is accepted
    /// while `0.00001` is not.
    pub fn new(amount: Decimal) -> Result<Self, WalletError> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::NonPositiveAmount(amount));
        }
        if amount.normalize().scale() > AMOUNT_SCALE {
            return Err(WalletError::ExcessPrecision(amount));
        }
        Ok(Self(amount))
    }

    /// Returns the wrapped amount.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for PositiveAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A wallet owner and their current balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Current balance; never negative between operations.
    pub balance: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// An immutable ledger row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Entry ID.
    pub id: TransactionId,
    /// Owning user.
    pub user_id: UserId,
    /// Unsigned amount; the sign comes from `transaction_type`.
    pub amount: Decimal,
    /// Entry type.
    pub transaction_type: TransactionType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Returns the entry's effect on the owner's balance.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.transaction_type.signed(self.amount)
    }
}

/// A ledger row waiting to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLedgerEntry {
    /// Owning user.
    pub user_id: UserId,
    /// Amount moved.
    pub amount: PositiveAmount,
    /// Entry type.
    pub transaction_type: TransactionType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl NewLedgerEntry {
    /// Builds an entry for `user_id`.
    #[must_use]
    pub const fn new(
        user_id: UserId,
        amount: PositiveAmount,
        transaction_type: TransactionType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            amount,
            transaction_type,
            created_at,
        }
    }
}

/// A user together with their most recent ledger entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    /// The user.
    pub user: User,
    /// Most recent entries, newest first.
    pub transactions: Vec<LedgerEntry>,
}

/// Result of a committed balance mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceChange {
    /// The user with the balance as committed.
    pub user: User,
    /// The ledger entry appended alongside the balance update.
    pub entry: LedgerEntry,
}

/// Sums the signed amounts of `entries`.
///
/// For a user's full ledger this equals the user's balance.
pub fn ledger_balance<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> Decimal {
    entries.into_iter().map(LedgerEntry::signed_amount).sum()
}
