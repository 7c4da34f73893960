//! Balance mutation over a transactional ledger store.
//!
//! Both operations follow the same shape:
//! 1. Open a scope and re-read the user with a row lock
//! 2. Compute the new balance from the locked row
//! 3. Write the balance and append the ledger entry
//! 4. Commit
//!
//! Any error between 1 and 4 drops the scope, which rolls back every write,
//! so a balance update never survives without its ledger entry.

use chrono::Utc;
use rust_decimal::Decimal;
use wallet_shared::types::UserId;

use super::error::WalletError;
use super::store::{LedgerScope, LedgerStore};
use super::types::{
    BalanceChange, MAX_BALANCE, NewLedgerEntry, PositiveAmount, TransactionType, User,
};

/// Moves money in and out of user wallets.
#[derive(Debug, Clone)]
pub struct WalletService<S> {
    store: S,
}

impl<S: LedgerStore> WalletService<S> {
    /// Creates a wallet service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Adds `amount` to the user's balance and records a `DEBIT` entry.
    ///
    /// Fails with [`WalletError::BalanceOverflow`] when the new balance would
    /// exceed [`MAX_BALANCE`].
    pub async fn receive(
        &self,
        user: &User,
        amount: PositiveAmount,
    ) -> Result<BalanceChange, WalletError> {
        let mut scope = self.store.begin().await?;
        let current = lock_user(&mut scope, user.id).await?;

        let balance = current
            .balance
            .checked_add(amount.value())
            .filter(|balance| *balance <= MAX_BALANCE)
            .ok_or(WalletError::BalanceOverflow(user.id))?;

        apply(scope, current, balance, amount, TransactionType::Debit).await
    }

    /// Subtracts `amount` from the user's balance and records a `CREDIT` entry.
    ///
    /// Fails with [`WalletError::InsufficientFunds`] without opening a scope
    /// when the pre-loaded balance is too small, and again inside the scope
    /// if a concurrent disbursement drained the locked row first.
    pub async fn disburse(
        &self,
        user: &User,
        amount: PositiveAmount,
    ) -> Result<BalanceChange, WalletError> {
        ensure_covers(user.balance, amount)?;

        let mut scope = self.store.begin().await?;
        let current = lock_user(&mut scope, user.id).await?;
        ensure_covers(current.balance, amount)?;

        let balance = current.balance - amount.value();
        apply(scope, current, balance, amount, TransactionType::Credit).await
    }
}

async fn lock_user<C: LedgerScope>(scope: &mut C, user_id: UserId) -> Result<User, WalletError> {
    scope
        .lock_user(user_id)
        .await?
        .ok_or(WalletError::UserNotFound(user_id))
}

fn ensure_covers(balance: Decimal, amount: PositiveAmount) -> Result<(), WalletError> {
    if balance < amount.value() {
        return Err(WalletError::InsufficientFunds {
            balance,
            requested: amount.value(),
        });
    }
    Ok(())
}

async fn apply<C: LedgerScope>(
    mut scope: C,
    current: User,
    balance: Decimal,
    amount: PositiveAmount,
    transaction_type: TransactionType,
) -> Result<BalanceChange, WalletError> {
    let now = Utc::now();

    scope.write_balance(current.id, balance, now).await?;
    let entry = scope
        .append_entry(NewLedgerEntry::new(current.id, amount, transaction_type, now))
        .await?;
    scope.commit().await?;

    Ok(BalanceChange {
        user: User {
            balance,
            updated_at: now,
            ..current
        },
        entry,
    })
}
