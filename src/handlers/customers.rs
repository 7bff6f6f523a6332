//! Customer identity endpoints: registration, login, listing.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::models::customer::{AuthResponse, CustomerResponse, LoginRequest, RegisterRequest};
use crate::services::identity;
use crate::AppState;

/// Register a new customer and issue a credential pair.
///
/// POST /api/customers/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let customer = identity::register(&state.db, &payload).await.map_err(|e| {
        warn!(phone = %payload.phone, error = %e, "registration rejected");
        e
    })?;

    info!(customer_id = customer.id, "customer registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful".to_string(),
            customer: CustomerResponse::from(&customer),
            tokens: state.tokens.issue(),
        }),
    ))
}

/// Authenticate by phone and password, issuing a fresh credential pair.
///
/// POST /api/customers/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let customer = identity::login(&state.db, &payload).await?;

    info!(customer_id = customer.id, "customer logged in");

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        customer: CustomerResponse::from(&customer),
        tokens: state.tokens.issue(),
    }))
}

/// All customers.
///
/// GET /api/customers
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = identity::list_customers(&state.db).await?;
    Ok(Json(customers.iter().map(CustomerResponse::from).collect()))
}
