use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A stored contact-form submission. Rows are written once and never updated.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
