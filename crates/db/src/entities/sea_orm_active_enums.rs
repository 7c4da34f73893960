//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry, stored as `CREDIT` / `DEBIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransactionType {
    #[sea_orm(string_value = "CREDIT")]
    Credit,
    #[sea_orm(string_value = "DEBIT")]
    Debit,
}

impl From<TransactionType> for wallet_core::TransactionType {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::Credit => Self::Credit,
            TransactionType::Debit => Self::Debit,
        }
    }
}

impl From<wallet_core::TransactionType> for TransactionType {
    fn from(value: wallet_core::TransactionType) -> Self {
        match value {
            wallet_core::TransactionType::Credit => Self::Credit,
            wallet_core::TransactionType::Debit => Self::Debit,
        }
    }
}
