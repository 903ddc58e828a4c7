use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::errors::AppError;

/// A calendar month as requested by the stats endpoint, parsed from
/// "YYYY-MM". Carries its half-open UTC interval so callers never redo the
/// date math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportMonth {
    year: i32,
    month: u32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ReportMonth {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let (year_part, month_part) = raw.split_once('-').ok_or_else(|| invalid_month(raw))?;

        let year: i32 = year_part.parse().map_err(|_| invalid_month(raw))?;
        let month: u32 = month_part.parse().map_err(|_| invalid_month(raw))?;

        let start = month_start(year, month).ok_or_else(|| invalid_month(raw))?;
        let end = if month == 12 {
            month_start(year + 1, 1)
        } else {
            month_start(year, month + 1)
        }
        .ok_or_else(|| invalid_month(raw))?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// Inclusive lower bound of the month.
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound: the first instant of the following month.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

fn month_start(year: i32, month: u32) -> Option<DateTime<Utc>> {
    let date = NaiveDate::from_ymd_opt(year, month, 1)?;
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn invalid_month(raw: &str) -> AppError {
    AppError::InvalidMonth(format!("Expected month as YYYY-MM, got '{}'", raw))
}

/// Aggregates for one project within one month. Derived on every stats
/// request, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlyProjectStats {
    pub project: String,
    pub responses: usize,
    pub avg_reactivity: f64,
    pub avg_deadlines: f64,
    pub avg_deliverables: f64,
    pub avg_professionalism: f64,
    pub avg_total: f64,
}

/// Recommendations for one project whose averages fell below the threshold.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectActionPlan {
    pub project: String,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub projects: Vec<MonthlyProjectStats>,
    pub action_plan: Vec<ProjectActionPlan>,
}
