//! SeaORM entity for orders.
//!
//! An order is a purchase of one fish for a given quantity. Rows are
//! created only by the order placement workflow and are immutable
//! afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Initial status assigned to every new order.
pub const STATUS_PENDING: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fish_id: i32,
    pub customer_id: i32,
    /// Ordered weight in kilograms
    #[sea_orm(column_type = "Decimal(Some((12, 3)))")]
    pub quantity: Decimal,
    /// quantity * price_per_kg at the time of the order
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fish::Entity",
        from = "Column::FishId",
        to = "super::fish::Column::Id",
        on_delete = "Restrict"
    )]
    Fish,
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_delete = "Cascade"
    )]
    Customers,
}

impl Related<super::fish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fish.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
