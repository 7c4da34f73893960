//! Database seeder for wallet development and testing.
//!
//! Creates a handful of users and funds them through the wallet service, so
//! every opening balance is backed by a `DEBIT` ledger entry.
//!
//! Usage: cargo run --bin seeder

use rust_decimal::Decimal;
use wallet_core::{PositiveAmount, User, WalletService};
use wallet_db::{SeaLedgerStore, UserRepository};
use wallet_shared::AppConfig;

/// Sample users and their opening deposits, in cents.
const SAMPLE_USERS: &[(&str, i64)] = &[
    ("Alice Johnson", 150_000),
    ("Bob Smith", 42_550),
    ("Carol Diaz", 0),
    ("Dimas Pratama", 9_999_900),
    ("Eve Martin", 1_025),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    println!("Connecting to database...");
    let db = wallet_db::connect(&config.database).await?;

    let users = UserRepository::new(db.clone());
    if users.count().await? > 0 {
        println!("  Users already exist, skipping...");
        return Ok(());
    }

    let wallet = WalletService::new(SeaLedgerStore::new(db));

    println!("Seeding users...");
    for (name, cents) in SAMPLE_USERS {
        let user: User = users.create(name, Decimal::ZERO).await?.into();

        match PositiveAmount::new(Decimal::new(*cents, 2)) {
            Ok(amount) => {
                let change = wallet.receive(&user, amount).await?;
                println!("  {name}: {}", change.user.balance);
            }
            Err(_) => println!("  {name}: 0"),
        }
    }

    println!("Seeding complete!");
    Ok(())
}
