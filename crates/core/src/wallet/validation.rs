//! Validation of receive/disburse request bodies.
//!
//! [`RequestValidator`] is constructed once at startup and handed to the
//! request handlers. It turns a raw [`WalletTransactionRequest`] into a
//! [`PositiveAmount`] or a field-to-message map for the client.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};
use wallet_shared::AppError;

use super::error::WalletError;
use super::types::PositiveAmount;

/// Placeholder replaced by the field name in message templates.
const FIELD_PLACEHOLDER: &str = "$field";

/// Body of `POST /wallets/receive/{id}` and `POST /wallets/disburse/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WalletTransactionRequest {
    /// Amount to move; must be present and greater than zero.
    #[validate(required)]
    pub amount: Option<Decimal>,
}

/// Field-level validation messages, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid request: {0:?}")]
pub struct ValidationFailure(pub BTreeMap<String, String>);

impl ValidationFailure {
    /// Returns the failures as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.0)
    }
}

impl From<ValidationFailure> for AppError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Unacceptable(failure.to_json())
    }
}

/// Validates wallet request bodies with customizable messages.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    messages: BTreeMap<String, String>,
    fallback: String,
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
            .with_message("required", "$field is required")
            .with_message("gt", "$field must be greater than 0")
            .with_message("scale", "$field must have at most 4 decimal places")
    }
}

impl RequestValidator {
    /// Creates a validator with no custom messages.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: BTreeMap::new(),
            fallback: "$field is invalid".to_string(),
        }
    }

    /// Sets the message template used for errors with `code`.
    ///
    /// `$field` in the template is replaced by the field name.
    #[must_use]
    pub fn with_message(mut self, code: &str, template: &str) -> Self {
        self.messages.insert(code.to_string(), template.to_string());
        self
    }

    /// Validates `request`, returning the amount to move.
    pub fn validate(
        &self,
        request: &WalletTransactionRequest,
    ) -> Result<PositiveAmount, ValidationFailure> {
        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);

        let amount = match request.amount.map(PositiveAmount::new) {
            Some(Ok(amount)) => Some(amount),
            Some(Err(WalletError::ExcessPrecision(_))) => {
                errors.add("amount", ValidationError::new("scale"));
                None
            }
            Some(Err(_)) => {
                errors.add("amount", ValidationError::new("gt"));
                None
            }
            None => None,
        };

        match amount {
            Some(amount) if errors.is_empty() => Ok(amount),
            _ => Err(self.describe(&errors)),
        }
    }

    fn describe(&self, errors: &ValidationErrors) -> ValidationFailure {
        let mut described = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            if let Some(error) = field_errors.first() {
                let message = self.render(&field, &error.code);
                described.insert(field, message);
            }
        }
        ValidationFailure(described)
    }

    fn render(&self, field: &str, code: &str) -> String {
        self.messages
            .get(code)
            .unwrap_or(&self.fallback)
            .replace(FIELD_PLACEHOLDER, field)
    }
}
