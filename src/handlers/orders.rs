//! Order endpoints.
//!
//! POST /api/orders is the inventory-safe placement workflow; the two
//! GET endpoints are plain reads.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::order::{OrderResponse, PlaceOrderRequest};
use crate::services::orders;
use crate::AppState;

/// Place an order for a given fish and quantity.
///
/// POST /api/orders
pub async fn place_order(
    State(state): State<AppState>,
    Json(payload): Json<PlaceOrderRequest>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    info!(
        fish_id = payload.fish_id,
        customer_id = payload.customer_id,
        quantity = %payload.quantity,
        "order placement requested"
    );

    let order = orders::place_order(&state.db, &payload).await.map_err(|e| {
        warn!(fish_id = payload.fish_id, error = %e, "order placement rejected");
        e
    })?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// All orders, newest first.
///
/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = orders::list_orders(&state.db).await?;
    Ok(Json(orders))
}

/// Orders for one customer, newest first.
///
/// GET /api/customers/{customer_id}/orders
pub async fn customer_orders(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = orders::orders_for_customer(&state.db, customer_id).await?;
    Ok(Json(orders))
}
