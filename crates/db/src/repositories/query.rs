//! Read-side composition for the HTTP layer.
//!
//! Maps rows into wallet domain types and pairs list pages with their
//! unfiltered totals.

use sea_orm::{DatabaseConnection, DbErr};
use wallet_core::{FilterPredicate, LedgerEntry, User, UserDetail, wallet::RECENT_ENTRIES};
use wallet_shared::types::{PageWindow, UserId};

use super::{TransactionRepository, UserRepository};

/// Read-only queries over users and their ledgers.
#[derive(Debug, Clone)]
pub struct WalletQueries {
    users: UserRepository,
    transactions: TransactionRepository,
}

impl WalletQueries {
    /// Creates the query set over `db`.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: UserRepository::new(db.clone()),
            transactions: TransactionRepository::new(db),
        }
    }

    /// Loads a live user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_user(&self, id: UserId) -> Result<Option<User>, DbErr> {
        Ok(self.users.find_by_id(id).await?.map(User::from))
    }

    /// Pairs `user` with their most recent ledger entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn compose_user_detail(&self, user: User) -> Result<UserDetail, DbErr> {
        let transactions = self
            .transactions
            .recent(user.id, RECENT_ENTRIES)
            .await?
            .into_iter()
            .map(LedgerEntry::from)
            .collect();

        Ok(UserDetail { user, transactions })
    }

    /// Returns one page of users and the unfiltered user count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_users(
        &self,
        filters: &[FilterPredicate],
        window: PageWindow,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let rows = self.users.list(filters, window).await?;
        let total = self.users.count().await?;

        Ok((rows.into_iter().map(User::from).collect(), total))
    }

    /// Returns one page of a user's entries and the user's unfiltered entry
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_transactions(
        &self,
        user_id: UserId,
        filters: &[FilterPredicate],
        window: PageWindow,
    ) -> Result<(Vec<LedgerEntry>, u64), DbErr> {
        let rows = self
            .transactions
            .list_for_user(user_id, filters, window)
            .await?;
        let total = self.transactions.count_for_user(user_id).await?;

        Ok((rows.into_iter().map(LedgerEntry::from).collect(), total))
    }
}
