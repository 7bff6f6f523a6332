use rust_decimal::Decimal;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::entities::orders;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub customer_id: i32,
    pub fish_id: i32,
    pub quantity: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: i32,
    pub fish_id: i32,
    pub fish_name: String,
    pub customer_id: i32,
    pub quantity: Decimal,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

impl OrderResponse {
    pub fn from_order(order: orders::Model, fish_name: String) -> Self {
        Self {
            id: order.id,
            fish_id: order.fish_id,
            fish_name,
            customer_id: order.customer_id,
            quantity: order.quantity,
            total_price: order.total_price,
            status: order.status,
            created_at: order.created_at,
        }
    }
}
