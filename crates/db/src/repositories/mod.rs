//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

mod conditions;
pub mod ledger;
pub mod query;
pub mod transaction;
pub mod user;

pub use ledger::{SeaLedgerScope, SeaLedgerStore};
pub use query::WalletQueries;
pub use transaction::TransactionRepository;
pub use user::UserRepository;
