//! Order placement and order queries.
//!
//! Placement is the one multi-step write in the system: check stock,
//! decrement it, and insert the order, all inside a single
//! transaction. The decrement is guarded (`total_kg >= quantity` in
//! the UPDATE's WHERE clause) so concurrent orders against the same
//! fish can never oversell, regardless of isolation level.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use crate::entities::orders::STATUS_PENDING;
use crate::entities::{fish, orders, prelude::*};
use crate::error::ApiError;
use crate::models::order::{OrderResponse, PlaceOrderRequest};

/// Price of `quantity` kilograms at `price_per_kg`, rounded to whole
/// cents.
pub fn compute_total_price(price_per_kg: Decimal, quantity: Decimal) -> Decimal {
    (price_per_kg * quantity).round_dp(2)
}

/// Place an order: decrement the fish's stock by `quantity` and create
/// exactly one order row, or change nothing and report why.
pub async fn place_order(
    db: &DatabaseConnection,
    req: &PlaceOrderRequest,
) -> Result<OrderResponse, ApiError> {
    if req.quantity <= Decimal::ZERO {
        return Err(ApiError::InvalidQuantity);
    }

    let txn = db.begin().await?;

    Customers::find_by_id(req.customer_id)
        .one(&txn)
        .await?
        .ok_or(ApiError::NotFound("customer"))?;

    let fish = Fish::find_by_id(req.fish_id)
        .one(&txn)
        .await?
        .ok_or(ApiError::NotFound("fish"))?;

    if fish.total_kg < req.quantity {
        return Err(ApiError::InsufficientStock);
    }

    let total_price = compute_total_price(fish.price_per_kg, req.quantity);
    let now = Utc::now().fixed_offset();

    // Guarded decrement: zero rows affected means another order
    // depleted the stock since the read above.
    let updated = Fish::update_many()
        .col_expr(
            fish::Column::TotalKg,
            Expr::col(fish::Column::TotalKg).sub(req.quantity),
        )
        .col_expr(fish::Column::UpdatedAt, Expr::value(now))
        .filter(fish::Column::Id.eq(req.fish_id))
        .filter(fish::Column::TotalKg.gte(req.quantity))
        .exec(&txn)
        .await?;

    if updated.rows_affected == 0 {
        return Err(ApiError::InsufficientStock);
    }

    let order = orders::ActiveModel {
        fish_id: Set(req.fish_id),
        customer_id: Set(req.customer_id),
        quantity: Set(req.quantity),
        total_price: Set(total_price),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        order_id = order.id,
        fish_id = req.fish_id,
        customer_id = req.customer_id,
        quantity = %req.quantity,
        total_price = %total_price,
        "order placed"
    );

    Ok(OrderResponse::from_order(order, fish.name))
}

/// All orders, newest first.
pub async fn list_orders(db: &DatabaseConnection) -> Result<Vec<OrderResponse>, ApiError> {
    let rows = Orders::find()
        .find_also_related(Fish)
        .order_by_desc(orders::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(order, fish)| {
            let name = fish.map(|f| f.name).unwrap_or_default();
            OrderResponse::from_order(order, name)
        })
        .collect())
}

/// Orders belonging to one customer, newest first. The customer must
/// exist.
pub async fn orders_for_customer(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<Vec<OrderResponse>, ApiError> {
    Customers::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("customer"))?;

    let rows = Orders::find()
        .filter(orders::Column::CustomerId.eq(customer_id))
        .find_also_related(Fish)
        .order_by_desc(orders::Column::CreatedAt)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(order, fish)| {
            let name = fish.map(|f| f.name).unwrap_or_default();
            OrderResponse::from_order(order, name)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_price_salmon_example() {
        assert_eq!(compute_total_price(dec!(10.00), dec!(5.0)), dec!(50.00));
    }

    #[test]
    fn test_total_price_rounds_to_cents() {
        // 3.33 * 0.125 = 0.41625 -> 0.42 (banker's rounding on the
        // half-cent would give 0.42 here either way)
        assert_eq!(compute_total_price(dec!(3.33), dec!(0.125)), dec!(0.42));
    }

    #[test]
    fn test_total_price_no_float_drift() {
        // 0.1 * 0.2 style cases stay exact in decimal
        assert_eq!(compute_total_price(dec!(0.10), dec!(0.2)), dec!(0.02));
    }
}
