use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;
use crate::submission::NewSubmission;

pub const THANK_YOU: &str = "Thank you! Your feedback has been submitted.";

pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<NewSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Rejected contact payload: {rejection}");
        AppError::BadRequest("Invalid JSON body".to_string())
    })?;

    let valid = payload.validate()?;
    let submission = db::submissions::create(&state.pool, &valid).await?;

    tracing::info!(submission_id = %submission.id, "Contact submission stored");

    Ok((StatusCode::CREATED, Json(json!({ "message": THANK_YOU }))))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = db::submissions::list(&state.pool).await?;
    Ok(Json(submissions))
}
