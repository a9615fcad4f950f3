use serde::{Deserialize, Deserializer, Serialize};
use validator::{Validate, ValidationError};

/// Consultation form submission
///
/// Missing or null required keys deserialize to empty strings so that
/// "absent", "null" and "empty" fail the same validation rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContactRequest {
    #[validate(custom(function = "not_blank"))]
    #[serde(rename = "fullName", default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(rename = "weddingDate", default)]
    pub wedding_date: Option<String>,
    #[serde(rename = "dreamWedding", default)]
    pub dream_wedding: Option<String>,
}

impl ContactRequest {
    /// Wire names of the required fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fullName", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}
