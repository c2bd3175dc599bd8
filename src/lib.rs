pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod views;
pub mod submission;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};

pub const BANNER: &str = "Contact intake backend is running";

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let state: SharedState = Arc::new(AppState { pool });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .route("/", get(banner))
        .route("/health", get(health))
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn banner() -> &'static str {
    BANNER
}

async fn health() -> &'static str {
    "ok"
}
