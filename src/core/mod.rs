//! Core abstractions for taskhint.
//!
//! This module provides the clock-free time and date utilities shared by the
//! annotator, the agenda, and the commands.

mod datetime;

pub use datetime::{is_overdue, parse_due_date, Meridiem, TimeOfDay};
