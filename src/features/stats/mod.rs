//! Completion statistics.
//!
//! Counts, per due date, how many of a user's tasks were completed over the
//! last week.

mod metrics;

pub use metrics::{CompletionTrend, DailyCompletion, TREND_DAYS};
