use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Duplicate submission: {0}")]
    DuplicateSubmission(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, Json<Value>) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))),
            AppError::DuplicateSubmission(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg })))
            }
            AppError::InvalidMonth(msg) => (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))),
            AppError::Database(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Storage unavailable", "details": details })),
            ),
        }
    }
}
