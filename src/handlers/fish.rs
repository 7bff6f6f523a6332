//! Fish listing endpoints and the dashboard summary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::entities::fish;
use crate::error::ApiError;
use crate::models::fish::{CreateFishRequest, SummaryResponse, UpdateFishRequest};
use crate::services::fish as fish_service;
use crate::AppState;

/// All fish listings.
///
/// GET /api/fish
pub async fn list_fish(State(state): State<AppState>) -> Result<Json<Vec<fish::Model>>, ApiError> {
    let fishes = fish_service::list_fish(&state.db).await?;
    Ok(Json(fishes))
}

/// Add a new fish listing.
///
/// POST /api/fish
pub async fn create_fish(
    State(state): State<AppState>,
    Json(payload): Json<CreateFishRequest>,
) -> Result<(StatusCode, Json<fish::Model>), ApiError> {
    let fish = fish_service::create_fish(&state.db, &payload).await?;
    info!(fish_id = fish.id, name = %fish.name, "fish created");
    Ok((StatusCode::CREATED, Json(fish)))
}

/// Edit an existing fish listing.
///
/// PUT /api/fish/{id}
pub async fn update_fish(
    State(state): State<AppState>,
    Path(fish_id): Path<i32>,
    Json(payload): Json<UpdateFishRequest>,
) -> Result<Json<fish::Model>, ApiError> {
    let fish = fish_service::update_fish(&state.db, fish_id, &payload).await?;
    Ok(Json(fish))
}

/// Delete a fish listing.
///
/// DELETE /api/fish/{id}
pub async fn delete_fish(
    State(state): State<AppState>,
    Path(fish_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    fish_service::delete_fish(&state.db, fish_id).await?;
    info!(fish_id, "fish deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard counters.
///
/// GET /api/summary
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = fish_service::summary(&state.db).await?;
    Ok(Json(summary))
}
