//! Monthly aggregation over stored feedback and the rule-based action plan.

use std::collections::BTreeMap;

use crate::models::feedback::FeedbackRecord;
use crate::models::stats::{MonthlyProjectStats, MonthlyReport, ProjectActionPlan, ReportMonth};

/// Dimension averages strictly below this value trigger a recommendation.
pub const RATING_THRESHOLD: f64 = 4.0;

pub const REACTIVITY_RECOMMENDATION: &str =
    "Agree on a response-time SLA and set up a regular communication cadence with the client.";
pub const DEADLINES_RECOMMENDATION: &str =
    "Split upcoming work into smaller milestones and plan buffer time into estimates.";
pub const DELIVERABLES_RECOMMENDATION: &str =
    "Introduce a delivery quality checklist and an internal review before each handoff.";
pub const PROFESSIONALISM_RECOMMENDATION: &str =
    "Hold a team retrospective and refresh client-facing communication training.";

/// Builds the report for one month from the records stored in that month.
/// Pure function of its inputs: the same records and month always produce
/// the same report.
pub fn build_monthly_report(month: &ReportMonth, records: &[FeedbackRecord]) -> MonthlyReport {
    // Group by project name; BTreeMap keeps the base order deterministic.
    let mut groups: BTreeMap<&str, Vec<&FeedbackRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.project.as_str())
            .or_default()
            .push(record);
    }

    let mut projects: Vec<MonthlyProjectStats> = groups
        .into_iter()
        .map(|(project, rows)| project_stats(project, &rows))
        .collect();

    // Worst-performing projects first.
    projects.sort_by(|a, b| {
        a.avg_total
            .partial_cmp(&b.avg_total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let action_plan = projects.iter().filter_map(action_plan_for).collect();

    MonthlyReport {
        month: month.label(),
        start: month.start(),
        end: month.end(),
        projects,
        action_plan,
    }
}

fn project_stats(project: &str, rows: &[&FeedbackRecord]) -> MonthlyProjectStats {
    let avg_reactivity = dimension_average(rows, |r| r.reactivity);
    let avg_deadlines = dimension_average(rows, |r| r.deadlines);
    let avg_deliverables = dimension_average(rows, |r| r.deliverables);
    let avg_professionalism = dimension_average(rows, |r| r.professionalism);

    MonthlyProjectStats {
        project: project.to_string(),
        responses: rows.len(),
        avg_reactivity,
        avg_deadlines,
        avg_deliverables,
        avg_professionalism,
        // Mean of the four dimension averages, not of raw per-response totals.
        avg_total: (avg_reactivity + avg_deadlines + avg_deliverables + avg_professionalism) / 4.0,
    }
}

fn dimension_average(rows: &[&FeedbackRecord], dimension: fn(&FeedbackRecord) -> i16) -> f64 {
    let sum: i64 = rows.iter().map(|r| i64::from(dimension(r))).sum();
    sum as f64 / rows.len() as f64
}

fn action_plan_for(stats: &MonthlyProjectStats) -> Option<ProjectActionPlan> {
    let checks = [
        (stats.avg_reactivity, REACTIVITY_RECOMMENDATION),
        (stats.avg_deadlines, DEADLINES_RECOMMENDATION),
        (stats.avg_deliverables, DELIVERABLES_RECOMMENDATION),
        (stats.avg_professionalism, PROFESSIONALISM_RECOMMENDATION),
    ];

    let recommendations: Vec<String> = checks
        .iter()
        .filter(|(avg, _)| *avg < RATING_THRESHOLD)
        .map(|(_, recommendation)| recommendation.to_string())
        .collect();

    if recommendations.is_empty() {
        None
    } else {
        Some(ProjectActionPlan {
            project: stats.project.clone(),
            recommendations,
        })
    }
}
