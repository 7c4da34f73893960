//! `SeaORM` Entity for transactions table.
//!
//! Rows are the append-only ledger behind `users.balance`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use wallet_shared::types::{TransactionId, UserId};

use super::sea_orm_active_enums::TransactionType;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    pub transaction_type: TransactionType,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for wallet_core::LedgerEntry {
    fn from(model: Model) -> Self {
        Self {
            id: TransactionId::new(model.id),
            user_id: UserId::new(model.user_id),
            amount: model.amount,
            transaction_type: model.transaction_type.into(),
            created_at: model.created_at.to_utc(),
        }
    }
}
