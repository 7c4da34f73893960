//! Shared query construction: soft-delete scoping, filter predicates, and
//! offset/limit windows.

use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, Condition, QuerySelect};
use wallet_core::FilterPredicate;
use wallet_shared::types::PageWindow;

use crate::entities::{sea_orm_active_enums::TransactionType, transactions, users};

/// Conjunction of the predicates that apply to `users`.
pub fn user_condition(filters: &[FilterPredicate]) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, predicate| match predicate {
            FilterPredicate::NameContains(fragment) => condition.add(
                Expr::expr(Func::lower(Expr::col(users::Column::Name)))
                    .like(format!("%{}%", fragment.to_lowercase())),
            ),
            FilterPredicate::MinBalance(min) => {
                condition.add(users::Column::Balance.gte(Decimal::from(*min)))
            }
            FilterPredicate::MaxBalance(max) => {
                condition.add(users::Column::Balance.lte(Decimal::from(*max)))
            }
            FilterPredicate::TransactionType(_) => condition,
        })
}

/// Conjunction of the predicates that apply to `transactions`.
pub fn transaction_condition(filters: &[FilterPredicate]) -> Condition {
    filters
        .iter()
        .fold(Condition::all(), |condition, predicate| match predicate {
            FilterPredicate::TransactionType(kind) => condition
                .add(transactions::Column::TransactionType.eq(TransactionType::from(*kind))),
            _ => condition,
        })
}

/// Applies `window` to a select. A negative page size leaves it unbounded.
pub fn paginate<S: QuerySelect>(select: S, window: PageWindow) -> S {
    match window.limit() {
        Some(limit) => select.limit(limit).offset(window.offset()),
        None => select,
    }
}
