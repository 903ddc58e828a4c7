use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    db::feedback::feedback_between,
    errors::AppError,
    models::stats::{MonthlyReport, ReportMonth},
    report::build_monthly_report,
    state::AppState,
};

#[derive(Deserialize)]
pub struct StatsQuery {
    pub month: Option<String>,
}

pub async fn monthly_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<MonthlyReport>, (StatusCode, Json<Value>)> {
    let raw = match query.month.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => {
            let err =
                AppError::InvalidMonth("Missing 'month' query parameter, expected YYYY-MM".into());
            tracing::warn!("Rejected stats request: {}", err);
            return Err(err.to_response());
        }
    };

    let month = ReportMonth::parse(&raw).map_err(|e| {
        tracing::warn!("Rejected stats request: {}", e);
        e.to_response()
    })?;

    let records = feedback_between(month.start(), month.end(), state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching feedback for {}: {}", month.label(), e);
            e.to_response()
        })?;

    let report = build_monthly_report(&month, &records);

    tracing::info!(
        "Monthly report for {}: {} projects, {} in action plan",
        report.month,
        report.projects.len(),
        report.action_plan.len()
    );

    Ok(Json(report))
}
