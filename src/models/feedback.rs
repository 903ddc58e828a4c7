use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::AppError;

pub const RATING_MIN: i16 = 1;
pub const RATING_MAX: i16 = 5;

/// One client's rating of one project, as stored. Rows are append-only:
/// there is no update or delete path for them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub email: String,
    pub client_name: String,
    pub project: String,
    pub reactivity: i16,
    pub deadlines: i16,
    pub deliverables: i16,
    pub professionalism: i16,
    pub reactivity_suggestion: Option<String>,
    pub deadlines_suggestion: Option<String>,
    pub deliverables_suggestion: Option<String>,
    pub professionalism_suggestion: Option<String>,
    pub global_comment: Option<String>,
}

/// Raw body of `POST /api/feedback`. Required fields stay `Option` here so
/// a missing field surfaces as a validation error rather than a
/// deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackPayload {
    pub email: Option<String>,
    pub client_name: Option<String>,
    pub project: Option<String>,
    pub reactivity: Option<i16>,
    pub deadlines: Option<i16>,
    pub deliverables: Option<i16>,
    pub professionalism: Option<i16>,
    pub reactivity_suggestion: Option<String>,
    pub deadlines_suggestion: Option<String>,
    pub deliverables_suggestion: Option<String>,
    pub professionalism_suggestion: Option<String>,
    pub global_comment: Option<String>,
}

/// A submission that passed validation and is ready to insert.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub email: String,
    pub client_name: String,
    pub project: String,
    pub reactivity: i16,
    pub deadlines: i16,
    pub deliverables: i16,
    pub professionalism: i16,
    pub reactivity_suggestion: Option<String>,
    pub deadlines_suggestion: Option<String>,
    pub deliverables_suggestion: Option<String>,
    pub professionalism_suggestion: Option<String>,
    pub global_comment: Option<String>,
}

impl NewFeedback {
    /// Validates a raw payload. Text fields are trimmed, empty optional
    /// fields collapse to `None`, ratings must lie in 1..=5.
    pub fn parse(payload: SubmitFeedbackPayload) -> Result<Self, AppError> {
        Ok(Self {
            email: required_text("email", payload.email)?,
            client_name: required_text("client_name", payload.client_name)?,
            project: required_text("project", payload.project)?,
            reactivity: rating("reactivity", payload.reactivity)?,
            deadlines: rating("deadlines", payload.deadlines)?,
            deliverables: rating("deliverables", payload.deliverables)?,
            professionalism: rating("professionalism", payload.professionalism)?,
            reactivity_suggestion: optional_text(payload.reactivity_suggestion),
            deadlines_suggestion: optional_text(payload.deadlines_suggestion),
            deliverables_suggestion: optional_text(payload.deliverables_suggestion),
            professionalism_suggestion: optional_text(payload.professionalism_suggestion),
            global_comment: optional_text(payload.global_comment),
        })
    }
}

fn required_text(field: &str, value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Err(AppError::Validation(format!(
                    "Field '{}' must not be empty",
                    field
                )))
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(AppError::Validation(format!(
            "Missing required field '{}'",
            field
        ))),
    }
}

fn rating(field: &str, value: Option<i16>) -> Result<i16, AppError> {
    match value {
        Some(value) if (RATING_MIN..=RATING_MAX).contains(&value) => Ok(value),
        Some(value) => Err(AppError::Validation(format!(
            "Field '{}' must be between {} and {}, got {}",
            field, RATING_MIN, RATING_MAX, value
        ))),
        None => Err(AppError::Validation(format!(
            "Missing required field '{}'",
            field
        ))),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|text| !text.is_empty())
}
