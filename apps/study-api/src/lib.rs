//! Study API - document analysis and study planning over HTTP
//!
//! The router and handlers live in the library so integration tests can
//! drive the full HTTP surface; the binary adds process concerns (env,
//! tracing, CORS) on top.

use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use state::AppState;

/// Build the API router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Document endpoints
        .route(
            "/api/documents",
            get(handlers::list_documents).post(handlers::upload_document),
        )
        // Study plan endpoints
        .route(
            "/api/study-plans",
            get(handlers::list_plans).post(handlers::create_plan),
        )
        .route("/api/study-plans/:plan_id", get(handlers::get_plan))
        .route(
            "/api/study-plans/:plan_id/goals/:goal_id",
            patch(handlers::update_goal),
        )
        .route(
            "/api/study-plans/:plan_id/progress",
            post(handlers::add_progress),
        )
        .with_state(state)
}
