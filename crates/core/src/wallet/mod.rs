//! Ledger-consistent wallet balances.
//!
//! This module implements the wallet core:
//! - Domain types for users, amounts, and ledger entries
//! - The transactional store boundary (`LedgerStore` / `LedgerScope`)
//! - `WalletService`, which moves money in and out of a balance while
//!   appending the matching ledger entry in the same scope
//! - Request validation for receive/disburse bodies
//!
//! A user's balance is stored denormalized next to the append-only ledger.
//! The two are only ever written together, so for every user
//! `balance == sum(DEBIT) - sum(CREDIT)`.

pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod memory;
#[cfg(test)]
mod service_props;

pub use error::{StoreError, WalletError};
pub use service::WalletService;
pub use store::{LedgerScope, LedgerStore};
pub use types::{
    AMOUNT_SCALE, BalanceChange, LedgerEntry, MAX_BALANCE, NewLedgerEntry, PositiveAmount,
    RECENT_ENTRIES, TransactionType, User, UserDetail, ledger_balance,
};
pub use validation::{RequestValidator, ValidationFailure, WalletTransactionRequest};
