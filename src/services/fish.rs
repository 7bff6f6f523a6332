//! Fish listing CRUD and the dashboard summary.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait, Set,
};

use crate::entities::{fish, prelude::*};
use crate::error::ApiError;
use crate::models::fish::{CreateFishRequest, SummaryResponse, UpdateFishRequest};

/// All fish listings.
pub async fn list_fish(db: &DatabaseConnection) -> Result<Vec<fish::Model>, ApiError> {
    Ok(Fish::find().all(db).await?)
}

/// Create a fish listing.
pub async fn create_fish(
    db: &DatabaseConnection,
    req: &CreateFishRequest,
) -> Result<fish::Model, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let now = Utc::now().fixed_offset();
    let fish = fish::ActiveModel {
        name: Set(req.name.trim().to_string()),
        price_per_kg: Set(req.price_per_kg),
        total_kg: Set(req.total_kg),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(fish)
}

/// Partial update of a fish listing.
pub async fn update_fish(
    db: &DatabaseConnection,
    fish_id: i32,
    req: &UpdateFishRequest,
) -> Result<fish::Model, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let fish = Fish::find_by_id(fish_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("fish"))?;

    let mut active = fish.into_active_model();
    if let Some(name) = &req.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(price) = req.price_per_kg {
        active.price_per_kg = Set(price);
    }
    if let Some(total) = req.total_kg {
        active.total_kg = Set(total);
    }
    active.updated_at = Set(Utc::now().fixed_offset());

    Ok(active.update(db).await?)
}

/// Delete a fish listing.
pub async fn delete_fish(db: &DatabaseConnection, fish_id: i32) -> Result<(), ApiError> {
    let result = Fish::delete_by_id(fish_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("fish"));
    }
    Ok(())
}

/// Dashboard counters: order count, stock on hand across all fish,
/// customer count.
pub async fn summary(db: &DatabaseConnection) -> Result<SummaryResponse, ApiError> {
    let orders = Orders::find().count(db).await?;
    let customers = Customers::find().count(db).await?;
    let total_kg: Decimal = Fish::find()
        .all(db)
        .await?
        .iter()
        .map(|f| f.total_kg)
        .sum();

    Ok(SummaryResponse {
        orders,
        total_kg,
        customers,
    })
}
