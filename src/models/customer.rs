use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::entities::customers;
use crate::services::identity::TokenPair;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

lazy_static! {
    // 7-15 digits, optional leading +
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9]{7,15}$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("full_name must not be empty".to_string());
        }
        if !PHONE_RE.is_match(&self.phone) {
            return Err("phone must be 7-15 digits, optionally prefixed with +".to_string());
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub full_name: String,
    pub phone: String,
}

impl From<&customers::Model> for CustomerResponse {
    fn from(customer: &customers::Model) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name.clone(),
            phone: customer.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub customer: CustomerResponse,
    pub tokens: TokenPair,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(full_name: &str, phone: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            full_name: full_name.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(request("Asha Nair", "+254712345678", "correct-horse").validate().is_ok());
        assert!(request("Bob", "0712345678", "longenough").validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(request("   ", "+254712345678", "longenough").validate().is_err());
    }

    #[test]
    fn test_bad_phone_rejected() {
        assert!(request("Asha", "12345", "longenough").validate().is_err());
        assert!(request("Asha", "not-a-phone", "longenough").validate().is_err());
        assert!(request("Asha", "+1234567890123456", "longenough").validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        assert!(request("Asha", "+254712345678", "short").validate().is_err());
    }
}
