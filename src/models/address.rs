use serde::{Deserialize, Deserializer, Serialize};

/// Deserializer for nullable patch fields: an absent field stays
/// `None` (leave unchanged), an explicit `null` becomes `Some(None)`
/// (clear the column).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAddressRequest {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

impl CreateAddressRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.line1.trim().is_empty() {
            return Err("line1 must not be empty".to_string());
        }
        if self.city.trim().is_empty() {
            return Err("city must not be empty".to_string());
        }
        Ok(())
    }
}

/// Partial update; absent fields keep their current values, and an
/// explicit `null` clears a nullable field. The default flag is only
/// changed through the set-default endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAddressRequest {
    pub line1: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub line2: Option<Option<String>>,
    pub city: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub region: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub postal_code: Option<Option<String>>,
}

impl UpdateAddressRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(line1) = &self.line1 {
            if line1.trim().is_empty() {
                return Err("line1 must not be empty".to_string());
            }
        }
        if let Some(city) = &self.city {
            if city.trim().is_empty() {
                return Err("city must not be empty".to_string());
            }
        }
        Ok(())
    }
}
