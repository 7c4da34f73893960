//! Shared setup for database tests.
//!
//! Every test gets its own in-memory `SQLite` database with the wallet
//! migrations applied. The pool holds exactly one connection so the
//! database lives as long as the pool.

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use wallet_core::{PositiveAmount, User, WalletService};
use wallet_db::migration::{Migrator, MigratorTrait};
use wallet_db::{SeaLedgerStore, UserRepository, connect};
use wallet_shared::DatabaseConfig;

pub async fn setup() -> DatabaseConnection {
    let config = DatabaseConfig {
        max_connections: 1,
        min_connections: 1,
        sqlx_logging: false,
        ..DatabaseConfig::new("sqlite::memory:")
    };
    let db = connect(&config).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub async fn seed_user(db: &DatabaseConnection, name: &str, balance: Decimal) -> User {
    UserRepository::new(db.clone())
        .create(name, balance)
        .await
        .expect("insert user")
        .into()
}

pub fn wallet(db: &DatabaseConnection) -> WalletService<SeaLedgerStore> {
    WalletService::new(SeaLedgerStore::new(db.clone()))
}

pub fn amount(value: Decimal) -> PositiveAmount {
    PositiveAmount::new(value).expect("positive amount")
}

pub async fn balance_of(db: &DatabaseConnection, user: &User) -> Decimal {
    UserRepository::new(db.clone())
        .find_by_id(user.id)
        .await
        .expect("query user")
        .expect("user exists")
        .balance
}
