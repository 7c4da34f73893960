//! `SeaORM` entities for the wallet schema.

pub mod sea_orm_active_enums;
pub mod transactions;
pub mod users;
