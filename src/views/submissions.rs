use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use sqlx::PgPool;

use crate::db;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

struct SubmissionRow {
    id: String,
    name: String,
    email: String,
    message: String,
    created_at: String,
}

impl From<&Submission> for SubmissionRow {
    fn from(sub: &Submission) -> Self {
        SubmissionRow {
            id: sub.id.to_string(),
            name: sub.name.clone(),
            email: sub.email.clone(),
            message: sub.message.clone(),
            created_at: sub.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "submissions/index.html")]
struct SubmissionsTemplate {
    rows: Vec<SubmissionRow>,
    total: i64,
}

#[derive(Template)]
#[template(path = "submissions/error.html")]
struct SubmissionsErrorTemplate {
    message: &'static str,
}

pub async fn index(State(state): State<SharedState>) -> Result<Response, AppError> {
    let (submissions, total) = match load(&state.pool).await {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::error!("Database error while rendering submissions: {err}");
            let template = SubmissionsErrorTemplate {
                message: "Submissions could not be loaded. Please try again later.",
            };
            let body = template
                .render()
                .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))?;
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response());
        }
    };

    render_table(&submissions, total)
        .map(|body| Html(body).into_response())
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))
}

async fn load(pool: &PgPool) -> Result<(Vec<Submission>, i64), sqlx::Error> {
    let submissions = db::submissions::list(pool).await?;
    let total = db::submissions::count(pool).await?;
    Ok((submissions, total))
}

fn render_table(submissions: &[Submission], total: i64) -> askama::Result<String> {
    SubmissionsTemplate {
        rows: submissions.iter().map(SubmissionRow::from).collect(),
        total,
    }
    .render()
}
