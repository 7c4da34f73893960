//! Wallet error types.

use rust_decimal::Decimal;
use thiserror::Error;
use wallet_shared::AppError;
use wallet_shared::types::UserId;

/// Failure reported by a ledger store.
///
/// Carries the backend's message verbatim. Any scope that observed this error
/// is rolled back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    /// Creates a store error from any displayable backend error.
    pub fn new(err: impl std::fmt::Display) -> Self {
        Self(err.to_string())
    }
}

/// Errors that can occur while moving money in or out of a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// The user does not exist (or was soft-deleted).
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The amount is zero or negative.
    #[error("Amount must be greater than 0, got {0}")]
    NonPositiveAmount(Decimal),

    /// The amount has more decimal places than the ledger stores.
    #[error("Amount must have at most 4 decimal places, got {0}")]
    ExcessPrecision(Decimal),

    /// A disbursement larger than the available balance.
    #[error("User Amount Insufficient: {balance:.2}")]
    InsufficientFunds {
        /// Balance at the time of the check.
        balance: Decimal,
        /// Amount requested.
        requested: Decimal,
    },

    /// The new balance exceeds the largest storable balance.
    #[error("Balance overflow for user {0}")]
    BalanceOverflow(UserId),

    /// Storage read, write, or commit failed.
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl WalletError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::ExcessPrecision(_) => "EXCESS_PRECISION",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::BalanceOverflow(_) => "BALANCE_OVERFLOW",
            Self::Storage(_) => "STORAGE_FAILURE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::UserNotFound(_)
            | Self::NonPositiveAmount(_)
            | Self::ExcessPrecision(_)
            | Self::InsufficientFunds { .. }
            | Self::BalanceOverflow(_) => 400,
            Self::Storage(_) => 500,
        }
    }
}

impl From<WalletError> for AppError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::UserNotFound(_) => Self::NotFound(err.to_string()),
            WalletError::NonPositiveAmount(_) | WalletError::ExcessPrecision(_) => {
                Self::InvalidInput(err.to_string())
            }
            WalletError::InsufficientFunds { .. } | WalletError::BalanceOverflow(_) => {
                Self::BusinessRule(err.to_string())
            }
            WalletError::Storage(inner) => Self::Database(inner.0),
        }
    }
}
