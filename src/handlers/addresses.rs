//! Address endpoints, all scoped to a customer id in the path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::entities::addresses;
use crate::error::ApiError;
use crate::models::address::{CreateAddressRequest, UpdateAddressRequest};
use crate::services::addresses as address_service;
use crate::AppState;

/// All addresses for a customer.
///
/// GET /api/customers/{customer_id}/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
) -> Result<Json<Vec<addresses::Model>>, ApiError> {
    let addresses = address_service::list_addresses(&state.db, customer_id).await?;
    Ok(Json(addresses))
}

/// Create a new address for a customer.
///
/// POST /api/customers/{customer_id}/addresses
pub async fn create_address(
    State(state): State<AppState>,
    Path(customer_id): Path<i32>,
    Json(payload): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<addresses::Model>), ApiError> {
    let address = address_service::create_address(&state.db, customer_id, &payload).await?;
    info!(customer_id, address_id = address.id, "address created");
    Ok((StatusCode::CREATED, Json(address)))
}

/// Fetch a single address.
///
/// GET /api/customers/{customer_id}/addresses/{address_id}
pub async fn get_address(
    State(state): State<AppState>,
    Path((customer_id, address_id)): Path<(i32, i32)>,
) -> Result<Json<addresses::Model>, ApiError> {
    let address = address_service::get_address(&state.db, customer_id, address_id).await?;
    Ok(Json(address))
}

/// Partially update an address.
///
/// PUT /api/customers/{customer_id}/addresses/{address_id}
pub async fn update_address(
    State(state): State<AppState>,
    Path((customer_id, address_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateAddressRequest>,
) -> Result<Json<addresses::Model>, ApiError> {
    let address =
        address_service::update_address(&state.db, customer_id, address_id, &payload).await?;
    Ok(Json(address))
}

/// Delete an address.
///
/// DELETE /api/customers/{customer_id}/addresses/{address_id}
pub async fn delete_address(
    State(state): State<AppState>,
    Path((customer_id, address_id)): Path<(i32, i32)>,
) -> Result<StatusCode, ApiError> {
    address_service::delete_address(&state.db, customer_id, address_id).await?;
    info!(customer_id, address_id, "address deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Mark an address as the customer's default. Any previous default is
/// cleared in the same transaction.
///
/// POST /api/customers/{customer_id}/addresses/{address_id}/default
pub async fn set_default_address(
    State(state): State<AppState>,
    Path((customer_id, address_id)): Path<(i32, i32)>,
) -> Result<Json<addresses::Model>, ApiError> {
    let address =
        address_service::set_default_address(&state.db, customer_id, address_id).await?;
    info!(customer_id, address_id, "default address set");
    Ok(Json(address))
}
