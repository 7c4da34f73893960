//! Sanitizing list filters from untrusted query parameters.
//!
//! Filters are best-effort: a value that does not make sense for its field is
//! dropped instead of failing the request.

use crate::wallet::TransactionType;

/// A sanitized list filter, consumed by the store's query construction.
///
/// All predicates of a list query are combined with `AND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterPredicate {
    /// `name LIKE %value%`, case-insensitive.
    NameContains(String),
    /// `transaction_type = value`.
    TransactionType(TransactionType),
    /// `balance >= value`.
    MinBalance(i64),
    /// `balance <= value`.
    MaxBalance(i64),
}

/// Builds the predicate for `field` from a raw query value and appends it
/// to `filters`.
///
/// - empty values are ignored
/// - `name` matches as a substring
/// - `type` is accepted only as exactly `CREDIT` or `DEBIT`
/// - `min_balance` / `max_balance` are accepted only as integers
/// - unknown fields are ignored
pub fn build_filter(field: &str, raw_value: &str, filters: &mut Vec<FilterPredicate>) {
    if raw_value.is_empty() {
        return;
    }

    let predicate = match field {
        "name" => Some(FilterPredicate::NameContains(raw_value.to_string())),
        "type" => raw_value.parse().ok().map(FilterPredicate::TransactionType),
        "min_balance" => raw_value.parse().ok().map(FilterPredicate::MinBalance),
        "max_balance" => raw_value.parse().ok().map(FilterPredicate::MaxBalance),
        _ => None,
    };

    filters.extend(predicate);
}
