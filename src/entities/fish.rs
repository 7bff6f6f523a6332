//! SeaORM entity for fish listings.
//!
//! A fish is inventory sold by weight; `total_kg` is the remaining
//! sellable stock and must never go negative.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fish")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Price per kilogram in currency units (2 decimal places)
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price_per_kg: Decimal,
    /// Remaining stock in kilograms (3 decimal places)
    #[sea_orm(column_type = "Decimal(Some((12, 3)))")]
    pub total_kg: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::orders::Entity")]
    Orders,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
