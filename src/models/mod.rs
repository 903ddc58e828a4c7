pub mod feedback;
pub mod stats;

pub use feedback::{FeedbackRecord, NewFeedback, SubmitFeedbackPayload};
pub use stats::{MonthlyProjectStats, MonthlyReport, ProjectActionPlan, ReportMonth};
