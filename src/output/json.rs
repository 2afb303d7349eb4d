//! JSON output formatting for taskhint.

use serde::Serialize;
use serde_json::json;

use crate::error::TaskhintError;
use crate::features::nlp::Annotation;
use crate::tasks::{Task, TaskList};

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], title: &str) -> Result<String, TaskhintError> {
    let output = json!({
        "list": title,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TaskhintError> {
    Ok(serde_json::to_string_pretty(task)?)
}

/// Format an annotation as JSON, echoing the annotated text.
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_annotation_json(text: &str, annotation: &Annotation) -> Result<String, TaskhintError> {
    let output = json!({
        "text": text,
        "inferred_time": annotation.inferred_time,
        "inferred_priority": annotation.inferred_priority,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format lists as JSON
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn format_lists_json(lists: &[TaskList]) -> Result<String, TaskhintError> {
    let output = json!({
        "count": lists.len(),
        "items": lists
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskhintError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskhintError> {
    Ok(serde_json::to_string_pretty(value)?)
}
