//! JSON response bodies.
//!
//! Money is serialized as decimal strings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use wallet_core::{LedgerEntry, TransactionType, User, UserDetail};
use wallet_shared::types::{TransactionId, UserId};

/// A user and their current balance.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Current balance.
    pub balance: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            balance: user.balance,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A single ledger entry.
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    /// Entry ID.
    pub id: TransactionId,
    /// Amount moved.
    pub amount: Decimal,
    /// `CREDIT` or `DEBIT`.
    pub transaction_type: TransactionType,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<LedgerEntry> for TransactionResponse {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id,
            amount: entry.amount,
            transaction_type: entry.transaction_type,
            created_at: entry.created_at,
        }
    }
}

/// A user with their most recent ledger entries.
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    /// User fields, inlined.
    #[serde(flatten)]
    pub user: UserResponse,
    /// Most recent entries, newest first.
    pub transactions: Vec<TransactionResponse>,
}

impl From<UserDetail> for UserDetailResponse {
    fn from(detail: UserDetail) -> Self {
        Self {
            user: detail.user.into(),
            transactions: detail.transactions.into_iter().map(Into::into).collect(),
        }
    }
}
