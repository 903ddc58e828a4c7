use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{errors::AppError, models::feedback::FeedbackRecord};

/// Fetches all feedback whose `created_at` lies in `[start, end)`.
pub async fn feedback_between(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    postgres: PgPool,
) -> Result<Vec<FeedbackRecord>, AppError> {
    let records = sqlx::query_as::<_, FeedbackRecord>(
        "SELECT id, created_at, email, client_name, project,
            reactivity, deadlines, deliverables, professionalism,
            reactivity_suggestion, deadlines_suggestion,
            deliverables_suggestion, professionalism_suggestion,
            global_comment
        FROM feedback
        WHERE created_at >= $1 AND created_at < $2
        ORDER BY created_at ASC",
    )
    .bind(start)
    .bind(end)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::Database(format!("Failed to fetch feedback: {}", e)))?;

    Ok(records)
}
