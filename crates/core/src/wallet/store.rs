//! Transactional storage boundary for the wallet core.
//!
//! A [`LedgerStore`] hands out [`LedgerScope`]s. Everything written through a
//! scope becomes visible atomically on [`LedgerScope::commit`]; a scope that
//! is dropped without committing is rolled back. Early returns via `?` are
//! therefore always safe.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use wallet_shared::types::UserId;

use super::error::StoreError;
use super::types::{LedgerEntry, NewLedgerEntry, User};

/// Opens transactional scopes against the ledger.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Scope type handed out by this store.
    type Scope: LedgerScope;

    /// Opens a new transactional scope.
    async fn begin(&self) -> Result<Self::Scope, StoreError>;
}

/// A unit of atomic reads and writes against the ledger.
#[async_trait]
pub trait LedgerScope: Send + Sized {
    /// Loads a live (not soft-deleted) user and locks the row for the rest
    /// of the scope, so concurrent scopes mutating the same user serialize.
    async fn lock_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError>;

    /// Overwrites the user's balance and stamps `updated_at`.
    async fn write_balance(
        &mut self,
        user_id: UserId,
        balance: Decimal,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError>;

    /// Appends a ledger entry and returns the stored row.
    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<LedgerEntry, StoreError>;

    /// Makes every write of this scope durable.
    async fn commit(self) -> Result<(), StoreError>;
}
