use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

pub const MISSING_FIELDS: &str = "All fields are required";

/// Incoming contact-form payload. Fields stay untyped so that absent, `null`
/// and other falsy values reach validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct NewSubmission {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

/// A payload that passed presence checks and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewSubmission {
    /// Only presence is checked: missing or falsy fields (`null`, `false`, `0`,
    /// `""`) are rejected, other scalars are stored as text. No format checks.
    pub fn validate(self) -> Result<ValidSubmission, AppError> {
        match (
            present_text(self.name),
            present_text(self.email),
            present_text(self.message),
        ) {
            (Some(name), Some(email), Some(message)) => Ok(ValidSubmission {
                name,
                email,
                message,
            }),
            _ => Err(AppError::BadRequest(MISSING_FIELDS.to_string())),
        }
    }
}

fn present_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        // arrays and objects have no text form to store
        _ => None,
    }
}
