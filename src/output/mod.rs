//! Output formatting for taskhint.
//!
//! This module provides formatters for displaying tasks, lists,
//! annotations, and completion stats in various formats.

mod json;
mod pretty;

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::error::TaskhintError;
use crate::features::nlp::Annotation;
use crate::features::stats::CompletionTrend;
use crate::tasks::{Agenda, Task, TaskList};

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    title: &str,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, now)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_task(
    task: &Task,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, now)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format an annotation based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_annotation(
    text: &str,
    annotation: &Annotation,
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_annotation_pretty(text, annotation)),
        OutputFormat::Json => format_annotation_json(text, annotation),
    }
}

/// Format lists based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_lists(lists: &[TaskList], format: OutputFormat) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_lists_pretty(lists)),
        OutputFormat::Json => format_lists_json(lists),
    }
}

/// Format a single list based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_list(list: &TaskList, format: OutputFormat) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_list_pretty(list)),
        OutputFormat::Json => to_json(list),
    }
}

/// Format the agenda based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_agenda(
    agenda: &Agenda,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_agenda_pretty(agenda, now)),
        OutputFormat::Json => to_json(agenda),
    }
}

/// Format completion stats based on output format
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_stats(trend: &CompletionTrend, format: OutputFormat) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(trend)),
        OutputFormat::Json => to_json(trend),
    }
}
