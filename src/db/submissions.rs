use sqlx::PgPool;

use crate::models::Submission;
use crate::submission::ValidSubmission;

pub async fn create(pool: &PgPool, new: &ValidSubmission) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (name, email, message)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(&new.name)
    .bind(&new.email)
    .bind(&new.message)
    .fetch_one(pool)
    .await
}

/// Every submission, newest first. Ties on `created_at` fall back to `id` so
/// repeated calls return the same order.
pub async fn list(pool: &PgPool) -> Result<Vec<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "SELECT * FROM submissions ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
