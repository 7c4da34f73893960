//! Core wallet logic.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Storage is reached only through the [`wallet::LedgerStore`] traits.
//!
//! # Modules
//!
//! - `wallet` - Balance mutation, ledger entries, and request validation
//! - `filter` - Sanitizing list filters from query parameters

pub mod filter;
pub mod wallet;

pub use filter::{FilterPredicate, build_filter};
pub use wallet::{
    BalanceChange, LedgerEntry, LedgerScope, LedgerStore, NewLedgerEntry, PositiveAmount,
    RequestValidator, StoreError, TransactionType, User, UserDetail, WalletError, WalletService,
    WalletTransactionRequest,
};
