//! Daily completion counts and rates.
//!
//! Tasks are bucketed by due date, not by when they were completed. A day's
//! rate is the share of the tasks due that day that are completed.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::tasks::Task;

/// Days covered by a [`CompletionTrend`], ending today.
pub const TREND_DAYS: i64 = 7;

// Percentages only need display precision.
#[allow(clippy::cast_precision_loss)]
fn percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

/// Completion numbers for one due date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    /// Tasks due that day that are completed
    pub completed: usize,
    /// All tasks due that day
    pub total: usize,
    /// Completed share in percent, 0 for days with no tasks
    pub rate: f64,
}

/// Completion numbers for the last [`TREND_DAYS`] days, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionTrend {
    pub days: Vec<DailyCompletion>,
    /// Completed tasks across the whole window
    pub completed: usize,
    /// Tasks due anywhere in the window
    pub total: usize,
    /// Completed share of the whole window in percent
    pub rate: f64,
}

impl CompletionTrend {
    /// Calculate the trend for the window ending at `today`.
    ///
    /// Tasks due outside the window are ignored.
    #[must_use]
    pub fn calculate(tasks: &[Task], today: NaiveDate) -> Self {
        let mut days: Vec<DailyCompletion> = (0..TREND_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
            .map(|date| DailyCompletion {
                date,
                completed: 0,
                total: 0,
                rate: 0.0,
            })
            .collect();

        for task in tasks {
            if let Some(day) = days.iter_mut().find(|d| d.date == task.due_date) {
                day.total += 1;
                if task.is_completed() {
                    day.completed += 1;
                }
            }
        }

        for day in &mut days {
            day.rate = percentage(day.completed, day.total);
        }

        let completed = days.iter().map(|d| d.completed).sum();
        let total = days.iter().map(|d| d.total).sum();

        Self {
            days,
            completed,
            total,
            rate: percentage(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeOfDay;
    use crate::features::nlp::PriorityLevel;
    use crate::tasks::{TaskStatus, INBOX_LIST_ID};

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn task(id: i64, due: NaiveDate, status: TaskStatus) -> Task {
        Task {
            id,
            title: format!("task {id}"),
            description: String::new(),
            due_date: due,
            time: TimeOfDay::MIDNIGHT,
            priority: PriorityLevel::None,
            status,
            owner: "alice".to_string(),
            list_id: INBOX_LIST_ID,
        }
    }

    #[test]
    fn test_window_is_seven_days_ending_today() {
        let trend = CompletionTrend::calculate(&[], date(3, 14));

        let dates: Vec<_> = trend.days.iter().map(|d| d.date).collect();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates.first(), Some(&date(3, 8)));
        assert_eq!(dates.last(), Some(&date(3, 14)));
    }

    #[test]
    fn test_empty_days_have_zero_rate() {
        let trend = CompletionTrend::calculate(&[], date(3, 14));

        assert!(trend.days.iter().all(|d| d.total == 0 && d.rate.abs() < f64::EPSILON));
        assert!(trend.rate.abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_and_rates_per_day() {
        let tasks = vec![
            task(1, date(3, 14), TaskStatus::Completed),
            task(2, date(3, 14), TaskStatus::Uncompleted),
            task(3, date(3, 12), TaskStatus::Completed),
            task(4, date(3, 8), TaskStatus::Uncompleted),
        ];
        let trend = CompletionTrend::calculate(&tasks, date(3, 14));

        let today = &trend.days[6];
        assert_eq!((today.completed, today.total), (1, 2));
        assert!((today.rate - 50.0).abs() < f64::EPSILON);

        let twelfth = &trend.days[4];
        assert_eq!((twelfth.completed, twelfth.total), (1, 1));
        assert!((twelfth.rate - 100.0).abs() < f64::EPSILON);

        let first = &trend.days[0];
        assert_eq!((first.completed, first.total), (0, 1));
        assert!(first.rate.abs() < f64::EPSILON);

        assert_eq!((trend.completed, trend.total), (2, 4));
        assert!((trend.rate - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tasks_outside_window_are_ignored() {
        let tasks = vec![
            task(1, date(3, 7), TaskStatus::Completed),
            task(2, date(3, 15), TaskStatus::Completed),
        ];
        let trend = CompletionTrend::calculate(&tasks, date(3, 14));

        assert_eq!(trend.total, 0);
        assert_eq!(trend.completed, 0);
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let tasks = vec![task(1, date(2, 28), TaskStatus::Completed)];
        let trend = CompletionTrend::calculate(&tasks, date(3, 2));

        assert_eq!(trend.days[0].date, date(2, 24));
        assert_eq!(trend.days[4].completed, 1);
    }
}
