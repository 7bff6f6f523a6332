//! API error taxonomy with HTTP response mapping.
//!
//! Every workflow failure is classified here and rendered as a
//! `{"error": "..."}` JSON body with a stable status code. Raw storage
//! errors are logged but never leaked to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input, client-correctable.
    #[error("{0}")]
    Validation(String),
    /// A referenced entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Order quantity was zero or negative.
    #[error("quantity must be greater than zero")]
    InvalidQuantity,
    /// Requested quantity exceeds the fish's remaining stock.
    #[error("not enough stock available")]
    InsufficientStock,
    /// The phone number is already registered.
    #[error("phone number is already registered")]
    DuplicatePhone,
    /// Unknown phone or wrong password; deliberately indistinct.
    #[error("invalid phone or password")]
    InvalidCredentials,
    /// Storage or transaction failure.
    #[error("internal server error")]
    Db(#[from] DbErr),
    /// Password hashing failure (or a corrupt stored hash).
    #[error("internal server error")]
    PasswordHash(argon2::password_hash::Error),
}

impl From<argon2::password_hash::Error> for ApiError {
    fn from(e: argon2::password_hash::Error) -> Self {
        ApiError::PasswordHash(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) | ApiError::InvalidQuantity | ApiError::InsufficientStock => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DuplicatePhone => StatusCode::CONFLICT,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Db(e) => {
                error!(error = %e, "database error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::PasswordHash(e) => {
                error!(error = %e, "password hashing error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
