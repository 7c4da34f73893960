//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for users and their ledger
//! - Repository abstractions for data access
//! - [`SeaLedgerStore`], the transactional store behind the wallet service
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{SeaLedgerStore, TransactionRepository, UserRepository, WalletQueries};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use wallet_shared::DatabaseConfig;

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime())
        .idle_timeout(config.idle_timeout())
        .connect_timeout(config.connect_timeout())
        .acquire_timeout(config.connect_timeout())
        .sqlx_logging(config.sqlx_logging);

    Database::connect(options).await
}
