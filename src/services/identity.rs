//! Customer registration and login.
//!
//! Passwords are hashed with Argon2id. Successful registration or
//! login issues an opaque bearer credential pair (short-lived access
//! token, longer-lived refresh token). The tokens are random and not
//! self-describing; verification middleware is out of scope here.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use rand::RngCore;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use serde::{Deserialize, Serialize};

use crate::entities::{customers, prelude::*};
use crate::error::ApiError;
use crate::models::customer::{LoginRequest, RegisterRequest};

/// Access token lifetime reported to clients, in seconds.
pub const DEFAULT_ACCESS_TTL_SECS: u64 = 15 * 60;
/// Refresh token lifetime, in seconds.
pub const DEFAULT_REFRESH_TTL_SECS: u64 = 7 * 24 * 60 * 60;

const TOKEN_BYTES: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

/// Mints bearer credential pairs for verified identities.
#[derive(Clone)]
pub struct TokenService {
    access_ttl_secs: u64,
    refresh_ttl_secs: u64,
}

impl TokenService {
    pub fn new(access_ttl_secs: u64, refresh_ttl_secs: u64) -> Self {
        Self {
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    pub fn refresh_ttl_secs(&self) -> u64 {
        self.refresh_ttl_secs
    }

    /// Issue a fresh credential pair. The two tokens are independent
    /// random values.
    pub fn issue(&self) -> TokenPair {
        TokenPair {
            access: mint_token(),
            refresh: mint_token(),
            expires_in: self.access_ttl_secs,
        }
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_TTL_SECS, DEFAULT_REFRESH_TTL_SECS)
    }
}

fn mint_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hash a password with Argon2id and a random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash. A mismatch is reported as
/// `InvalidCredentials`; a hash that fails to parse is an internal
/// error (the stored value is corrupt).
pub fn verify_password(password: &str, stored_hash: &str) -> Result<(), ApiError> {
    let parsed = PasswordHash::new(stored_hash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::InvalidCredentials)
}

/// Register a new customer. Fails with `DuplicatePhone` if the phone
/// number is already taken; the phone column's unique constraint backs
/// this, so a concurrent registration of the same phone cannot slip
/// through as a storage error.
pub async fn register(
    db: &DatabaseConnection,
    req: &RegisterRequest,
) -> Result<customers::Model, ApiError> {
    req.validate().map_err(ApiError::Validation)?;

    let password_hash = hash_password(&req.password)?;

    let customer = customers::ActiveModel {
        full_name: Set(req.full_name.trim().to_string()),
        phone: Set(req.phone.clone()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::DuplicatePhone,
        _ => ApiError::Db(e),
    })?;

    Ok(customer)
}

/// Authenticate a customer by phone and password. Unknown phone and
/// wrong password both map to `InvalidCredentials`.
pub async fn login(
    db: &DatabaseConnection,
    req: &LoginRequest,
) -> Result<customers::Model, ApiError> {
    let customer = Customers::find()
        .filter(customers::Column::Phone.eq(&req.phone))
        .one(db)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    verify_password(&req.password, &customer.password_hash)?;

    Ok(customer)
}

/// List all customers.
pub async fn list_customers(db: &DatabaseConnection) -> Result<Vec<customers::Model>, ApiError> {
    Ok(Customers::find().all(db).await?)
}
