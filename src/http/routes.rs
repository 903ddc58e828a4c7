use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{health_handler, monthly_stats_handler, submit_feedback_handler},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/feedback", post(submit_feedback_handler))
        .route("/api/stats", get(monthly_stats_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}
