//! Customer-scoped address CRUD.
//!
//! Every lookup is filtered by both customer id and address id, so an
//! address belonging to another customer is indistinguishable from a
//! missing one.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, TransactionTrait,
};

use crate::entities::{addresses, prelude::*};
use crate::error::ApiError;
use crate::models::address::{CreateAddressRequest, UpdateAddressRequest};

async fn require_customer(db: &DatabaseConnection, customer_id: i32) -> Result<(), ApiError> {
    Customers::find_by_id(customer_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("customer"))?;
    Ok(())
}

/// All addresses for one customer.
pub async fn list_addresses(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<Vec<addresses::Model>, ApiError> {
    require_customer(db, customer_id).await?;

    Ok(Addresses::find()
        .filter(addresses::Column::CustomerId.eq(customer_id))
        .all(db)
        .await?)
}

/// Create an address. If it is flagged as the default, any existing
/// default for the customer is cleared in the same transaction.
pub async fn create_address(
    db: &DatabaseConnection,
    customer_id: i32,
    req: &CreateAddressRequest,
) -> Result<addresses::Model, ApiError> {
    req.validate().map_err(ApiError::Validation)?;
    require_customer(db, customer_id).await?;

    let txn = db.begin().await?;

    if req.is_default {
        clear_defaults(&txn, customer_id).await?;
    }

    let address = addresses::ActiveModel {
        customer_id: Set(customer_id),
        line1: Set(req.line1.trim().to_string()),
        line2: Set(req.line2.clone()),
        city: Set(req.city.trim().to_string()),
        region: Set(req.region.clone()),
        postal_code: Set(req.postal_code.clone()),
        is_default: Set(req.is_default),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(address)
}

/// Fetch one address scoped to its owner.
pub async fn get_address(
    db: &DatabaseConnection,
    customer_id: i32,
    address_id: i32,
) -> Result<addresses::Model, ApiError> {
    Addresses::find_by_id(address_id)
        .filter(addresses::Column::CustomerId.eq(customer_id))
        .one(db)
        .await?
        .ok_or(ApiError::NotFound("address"))
}

/// Partial update of an address; absent fields are left unchanged.
pub async fn update_address(
    db: &DatabaseConnection,
    customer_id: i32,
    address_id: i32,
    req: &UpdateAddressRequest,
) -> Result<addresses::Model, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let address = get_address(db, customer_id, address_id).await?;
    let mut active = address.into_active_model();

    if let Some(line1) = &req.line1 {
        active.line1 = Set(line1.trim().to_string());
    }
    // Double-option fields: Some(None) clears the column
    if let Some(line2) = &req.line2 {
        active.line2 = Set(line2.clone());
    }
    if let Some(city) = &req.city {
        active.city = Set(city.trim().to_string());
    }
    if let Some(region) = &req.region {
        active.region = Set(region.clone());
    }
    if let Some(postal_code) = &req.postal_code {
        active.postal_code = Set(postal_code.clone());
    }

    Ok(active.update(db).await?)
}

/// Delete an address scoped to its owner.
pub async fn delete_address(
    db: &DatabaseConnection,
    customer_id: i32,
    address_id: i32,
) -> Result<(), ApiError> {
    let result = Addresses::delete_many()
        .filter(addresses::Column::Id.eq(address_id))
        .filter(addresses::Column::CustomerId.eq(customer_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ApiError::NotFound("address"));
    }
    Ok(())
}

/// Mark one address as the customer's default, clearing every other
/// default flag in the same transaction so exactly one default remains.
pub async fn set_default_address(
    db: &DatabaseConnection,
    customer_id: i32,
    address_id: i32,
) -> Result<addresses::Model, ApiError> {
    let address = get_address(db, customer_id, address_id).await?;

    let txn = db.begin().await?;

    clear_defaults(&txn, customer_id).await?;

    let mut active = address.into_active_model();
    active.is_default = Set(true);
    let address = active.update(&txn).await?;

    txn.commit().await?;

    Ok(address)
}

async fn clear_defaults<C: sea_orm::ConnectionTrait>(
    conn: &C,
    customer_id: i32,
) -> Result<(), ApiError> {
    Addresses::update_many()
        .col_expr(addresses::Column::IsDefault, Expr::value(false))
        .filter(addresses::Column::CustomerId.eq(customer_id))
        .filter(addresses::Column::IsDefault.eq(true))
        .exec(conn)
        .await?;
    Ok(())
}
