use sqlx::PgPool;

use crate::errors::AppError;

/// Ensures the feedback table and its uniqueness constraint exist. Runs at
/// startup and is idempotent.
pub async fn init_schema(postgres: PgPool) -> Result<(), AppError> {
    tracing::info!("Ensuring feedback schema exists...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS feedback (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            email TEXT NOT NULL,
            client_name TEXT NOT NULL,
            project TEXT NOT NULL,
            reactivity SMALLINT NOT NULL,
            deadlines SMALLINT NOT NULL,
            deliverables SMALLINT NOT NULL,
            professionalism SMALLINT NOT NULL,
            reactivity_suggestion TEXT,
            deadlines_suggestion TEXT,
            deliverables_suggestion TEXT,
            professionalism_suggestion TEXT,
            global_comment TEXT,
            CONSTRAINT feedback_client_project_key UNIQUE (client_name, project)
        )",
    )
    .execute(&postgres)
    .await
    .map_err(|e| AppError::Database(format!("Failed to ensure feedback table: {}", e)))?;

    Ok(())
}
