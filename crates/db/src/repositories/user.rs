//! User repository for database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use wallet_core::FilterPredicate;
use wallet_shared::types::{PageWindow, UserId};

use super::conditions::{paginate, user_condition};
use crate::entities::users;

/// User repository. Soft-deleted users are invisible to every read.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a live user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.into_inner())
            .filter(users::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
    }

    /// Lists users matching every filter, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filters: &[FilterPredicate],
        window: PageWindow,
    ) -> Result<Vec<users::Model>, DbErr> {
        let select = users::Entity::find()
            .filter(users::Column::DeletedAt.is_null())
            .filter(user_condition(filters))
            .order_by_asc(users::Column::Id);

        paginate(select, window).all(&self.db).await
    }

    /// Counts live users, ignoring any filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        users::Entity::find()
            .filter(users::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
    }

    /// Creates a user with an opening balance.
    ///
    /// The balance is written as-is, without a ledger entry, so callers
    /// outside of seeding should open users at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, name: &str, balance: Decimal) -> Result<users::Model, DbErr> {
        let now = Utc::now().fixed_offset();
        users::ActiveModel {
            name: Set(name.to_string()),
            balance: Set(balance),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        }
        .insert(&self.db)
        .await
    }

    /// Marks a user as deleted. Returns `false` if no live user matched.
    ///
    /// # Errors
    ///
    /// Returns an error if the database update fails.
    pub async fn soft_delete(&self, id: UserId) -> Result<bool, DbErr> {
        let result = users::Entity::update_many()
            .col_expr(
                users::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now().fixed_offset()),
            )
            .filter(users::Column::Id.eq(id.into_inner()))
            .filter(users::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
