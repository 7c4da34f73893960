//! `SeaORM` implementation of the wallet's transactional ledger store.
//!
//! A scope is one database transaction. The user row is read with
//! `SELECT ... FOR UPDATE` so concurrent mutations of the same wallet
//! serialize on PostgreSQL. Dropping a scope without committing rolls the
//! transaction back.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use tracing::debug;
use wallet_core::{LedgerEntry, LedgerScope, LedgerStore, NewLedgerEntry, StoreError, User};
use wallet_shared::types::UserId;

use crate::entities::{transactions, users};

/// Ledger store over a `SeaORM` connection pool.
#[derive(Debug, Clone)]
pub struct SeaLedgerStore {
    db: DatabaseConnection,
}

impl SeaLedgerStore {
    /// Creates a store over `db`.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// One open database transaction.
pub struct SeaLedgerScope {
    txn: DatabaseTransaction,
}

#[async_trait]
impl LedgerStore for SeaLedgerStore {
    type Scope = SeaLedgerScope;

    async fn begin(&self) -> Result<SeaLedgerScope, StoreError> {
        let txn = self.db.begin().await.map_err(StoreError::new)?;
        Ok(SeaLedgerScope { txn })
    }
}

#[async_trait]
impl LedgerScope for SeaLedgerScope {
    async fn lock_user(&mut self, user_id: UserId) -> Result<Option<User>, StoreError> {
        let user = users::Entity::find_by_id(user_id.into_inner())
            .filter(users::Column::DeletedAt.is_null())
            .lock_exclusive()
            .one(&self.txn)
            .await
            .map_err(StoreError::new)?;

        Ok(user.map(User::from))
    }

    async fn write_balance(
        &mut self,
        user_id: UserId,
        balance: Decimal,
        updated_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Balance, Expr::value(balance))
            .col_expr(users::Column::UpdatedAt, Expr::value(updated_at.fixed_offset()))
            .filter(users::Column::Id.eq(user_id.into_inner()))
            .exec(&self.txn)
            .await
            .map_err(StoreError::new)?;

        if result.rows_affected != 1 {
            return Err(StoreError(format!(
                "balance update for user {user_id} touched {} rows",
                result.rows_affected
            )));
        }
        debug!(user_id = %user_id, balance = %balance, "Balance written");
        Ok(())
    }

    async fn append_entry(&mut self, entry: NewLedgerEntry) -> Result<LedgerEntry, StoreError> {
        let created_at = entry.created_at.fixed_offset();
        let model = transactions::ActiveModel {
            user_id: Set(entry.user_id.into_inner()),
            amount: Set(entry.amount.value()),
            transaction_type: Set(entry.transaction_type.into()),
            created_at: Set(created_at),
            updated_at: Set(created_at),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&self.txn)
        .await
        .map_err(StoreError::new)?;

        Ok(model.into())
    }

    async fn commit(self) -> Result<(), StoreError> {
        self.txn.commit().await.map_err(StoreError::new)
    }
}
