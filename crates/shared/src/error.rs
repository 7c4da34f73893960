//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Missing records are reported as bad requests: clients address users by
/// id in the path, so an unknown id is treated as a malformed request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input (e.g. a non-integer path id).
    #[error("{0}")]
    InvalidInput(String),

    /// Resource not found.
    #[error("{0}")]
    NotFound(String),

    /// Request body failed validation.
    ///
    /// Carries either a field-to-message map or a plain message.
    #[error("Validation failed: {0}")]
    Unacceptable(serde_json::Value),

    /// Business rule violation (e.g. insufficient funds).
    #[error("{0}")]
    BusinessRule(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) | Self::NotFound(_) | Self::BusinessRule(_) => 400,
            Self::Unacceptable(_) => 406,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unacceptable(_) => "VALIDATION_ERROR",
            Self::BusinessRule(_) => "BUSINESS_RULE_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for failures caused by the service rather than the caller.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
