use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::{
    db::feedback::insert_feedback,
    models::feedback::{NewFeedback, SubmitFeedbackPayload},
    state::AppState,
};

pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitFeedbackPayload>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let feedback = NewFeedback::parse(payload).map_err(|e| {
        tracing::warn!("Rejected feedback submission: {}", e);
        e.to_response()
    })?;

    match insert_feedback(feedback, state.postgres.clone()).await {
        Ok(record) => {
            tracing::info!(
                "Feedback recorded for project '{}' (ID: {})",
                record.project,
                record.id
            );
            Ok(Json(json!({
                "ok": true,
                "message": "Feedback recorded, thank you!"
            })))
        }
        Err(err) => {
            tracing::error!("Error storing feedback: {}", err);
            Err(err.to_response())
        }
    }
}
