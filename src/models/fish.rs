use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFishRequest {
    pub name: String,
    pub price_per_kg: Decimal,
    pub total_kg: Decimal,
}

impl CreateFishRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.price_per_kg.is_sign_negative() {
            return Err("price_per_kg must not be negative".to_string());
        }
        if self.total_kg.is_sign_negative() {
            return Err("total_kg must not be negative".to_string());
        }
        Ok(())
    }
}

/// Partial update; absent fields keep their current values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFishRequest {
    pub name: Option<String>,
    pub price_per_kg: Option<Decimal>,
    pub total_kg: Option<Decimal>,
}

impl UpdateFishRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
        }
        if let Some(price) = self.price_per_kg {
            if price.is_sign_negative() {
                return Err("price_per_kg must not be negative".to_string());
            }
        }
        if let Some(total) = self.total_kg {
            if total.is_sign_negative() {
                return Err("total_kg must not be negative".to_string());
            }
        }
        Ok(())
    }
}

/// Dashboard counters: order count, stock on hand, customer count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub orders: u64,
    pub total_kg: Decimal,
    pub customers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_validation() {
        let req = CreateFishRequest {
            name: "Salmon".to_string(),
            price_per_kg: dec!(10.00),
            total_kg: dec!(5.0),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let req = CreateFishRequest {
            name: "Salmon".to_string(),
            price_per_kg: dec!(-1.00),
            total_kg: dec!(5.0),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_rejects_blank_name() {
        let req = UpdateFishRequest {
            name: Some("  ".to_string()),
            price_per_kg: None,
            total_kg: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_allows_empty_patch() {
        let req = UpdateFishRequest {
            name: None,
            price_per_kg: None,
            total_kg: None,
        };
        assert!(req.validate().is_ok());
    }
}
