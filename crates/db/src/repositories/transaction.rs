//! Ledger entry reads.
//!
//! Entries are written only by [`super::SeaLedgerStore`], inside the same
//! database transaction as the balance update they record.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use wallet_core::FilterPredicate;
use wallet_shared::types::{PageWindow, UserId};

use super::conditions::{paginate, transaction_condition};
use crate::entities::transactions;

/// Read access to the `transactions` ledger.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn live_for_user(user_id: UserId) -> sea_orm::Select<transactions::Entity> {
        transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id.into_inner()))
            .filter(transactions::Column::DeletedAt.is_null())
    }

    /// Returns the user's `limit` most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn recent(
        &self,
        user_id: UserId,
        limit: u64,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        Self::live_for_user(user_id)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
    }

    /// Lists the user's entries matching every filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_for_user(
        &self,
        user_id: UserId,
        filters: &[FilterPredicate],
        window: PageWindow,
    ) -> Result<Vec<transactions::Model>, DbErr> {
        let select = Self::live_for_user(user_id)
            .filter(transaction_condition(filters))
            .order_by_desc(transactions::Column::Id);

        paginate(select, window).all(&self.db).await
    }

    /// Counts the user's entries, ignoring any filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count_for_user(&self, user_id: UserId) -> Result<u64, DbErr> {
        Self::live_for_user(user_id).count(&self.db).await
    }
}
