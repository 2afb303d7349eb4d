use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::{is_overdue, TimeOfDay};
use crate::error::TaskhintError;
use crate::features::nlp::PriorityLevel;

/// Store-generated task identifier.
pub type TaskId = i64;

/// Store-generated list identifier.
pub type ListId = i64;

/// The shared Inbox list every task lands in by default.
pub const INBOX_LIST_ID: ListId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Uncompleted,
    Completed,
}

impl TaskStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uncompleted => "uncompleted",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskhintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uncompleted" => Ok(Self::Uncompleted),
            "completed" => Ok(Self::Completed),
            other => Err(TaskhintError::InvalidInput(format!(
                "unknown task status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: NaiveDate,
    pub time: TimeOfDay,
    pub priority: PriorityLevel,
    pub status: TaskStatus,
    pub owner: String,
    pub list_id: ListId,
}

impl Task {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Open and past its due date and time at `now`.
    #[must_use]
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_completed() && is_overdue(self.due_date, self.time, now)
    }
}

/// Fields of a task about to be created. New tasks start uncompleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub time: TimeOfDay,
    pub priority: PriorityLevel,
    pub owner: String,
    pub list_id: ListId,
}

/// Replacement values for a task's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub time: TimeOfDay,
    pub priority: PriorityLevel,
    pub list_id: ListId,
}

impl TaskUpdate {
    /// Start from the task's current values.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            time: task.time,
            priority: task.priority,
            list_id: task.list_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: ListId,
    pub name: String,
    /// `None` for the shared Inbox.
    #[serde(default)]
    pub owner: Option<String>,
}

impl TaskList {
    #[must_use]
    pub const fn is_inbox(&self) -> bool {
        self.id == INBOX_LIST_ID
    }
}
