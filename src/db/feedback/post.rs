use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::feedback::{FeedbackRecord, NewFeedback},
};

/// Inserts one validated submission. `created_at` is stamped by the
/// database. A unique violation on (client_name, project) becomes a typed
/// duplicate error; the insert is a single best-effort attempt, never
/// retried here.
pub async fn insert_feedback(
    feedback: NewFeedback,
    postgres: PgPool,
) -> Result<FeedbackRecord, AppError> {
    let record = sqlx::query_as::<_, FeedbackRecord>(
        "INSERT INTO feedback (
            email, client_name, project,
            reactivity, deadlines, deliverables, professionalism,
            reactivity_suggestion, deadlines_suggestion,
            deliverables_suggestion, professionalism_suggestion,
            global_comment
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, created_at, email, client_name, project,
            reactivity, deadlines, deliverables, professionalism,
            reactivity_suggestion, deadlines_suggestion,
            deliverables_suggestion, professionalism_suggestion,
            global_comment",
    )
    .bind(&feedback.email)
    .bind(&feedback.client_name)
    .bind(&feedback.project)
    .bind(feedback.reactivity)
    .bind(feedback.deadlines)
    .bind(feedback.deliverables)
    .bind(feedback.professionalism)
    .bind(&feedback.reactivity_suggestion)
    .bind(&feedback.deadlines_suggestion)
    .bind(&feedback.deliverables_suggestion)
    .bind(&feedback.professionalism_suggestion)
    .bind(&feedback.global_comment)
    .fetch_one(&postgres)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateSubmission(format!(
                "'{}' has already rated project '{}'",
                feedback.client_name, feedback.project
            ))
        }
        _ => AppError::Database(format!("Failed to insert feedback: {}", e)),
    })?;

    tracing::info!(
        "Stored feedback from '{}' for project '{}' (ID: {})",
        record.client_name,
        record.project,
        record.id
    );

    Ok(record)
}
