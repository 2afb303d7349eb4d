//! Command implementations for taskhint.
//!
//! Every command returns the text to print, already formatted for the
//! requested [`OutputFormat`].

mod add;
mod annotate;
mod completions;
mod config;
mod lists;

pub use add::{add, edit};
pub use annotate::annotate;
pub use completions::completions;
pub use config::config;
pub use lists::lists;

use chrono::NaiveDateTime;
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, SearchArgs, TasksArgs};
use crate::error::TaskhintError;
use crate::features::nlp::Annotator;
use crate::features::stats::CompletionTrend;
use crate::output::{format_agenda, format_lists, format_stats, format_task, format_tasks};
use crate::tasks::{Agenda, AgendaGroup, Task, TaskId, TaskList, TaskStatus, TaskStore};

/// Everything a store-backed command needs.
pub struct CommandContext<'a> {
    /// Task storage.
    pub store: &'a dyn TaskStore,
    /// Annotator built from the config.
    pub annotator: &'a Annotator,
    /// Owner of the tasks and lists being read or written.
    pub owner: &'a str,
    /// Local wall-clock time the command runs at.
    pub now: NaiveDateTime,
    /// Output format.
    pub format: OutputFormat,
}

impl CommandContext<'_> {
    /// Load a task, treating other owners' tasks as missing.
    fn owned_task(&self, id: TaskId) -> Result<Task, TaskhintError> {
        let task = self.store.get_task(id)?;
        if task.owner == self.owner {
            Ok(task)
        } else {
            Err(TaskhintError::NotFound(format!("task {id}")))
        }
    }

    fn format_changed(&self, label: &str, task: &Task) -> Result<String, TaskhintError> {
        match self.format {
            OutputFormat::Json => format_task(task, self.now, self.format),
            OutputFormat::Pretty => Ok(format!(
                "{} {} (ID: {})",
                label.green().bold(),
                task.title,
                task.id.to_string().dimmed()
            )),
        }
    }
}

/// Execute complete command
///
/// # Errors
///
/// Returns an error if the task does not exist or the store fails.
pub fn complete(ctx: &CommandContext<'_>, id: TaskId) -> Result<String, TaskhintError> {
    ctx.owned_task(id)?;
    let task = ctx.store.set_status(id, TaskStatus::Completed)?;
    ctx.format_changed("Completed:", &task)
}

/// Execute reopen command
///
/// # Errors
///
/// Returns an error if the task does not exist or the store fails.
pub fn reopen(ctx: &CommandContext<'_>, id: TaskId) -> Result<String, TaskhintError> {
    ctx.owned_task(id)?;
    let task = ctx.store.set_status(id, TaskStatus::Uncompleted)?;
    ctx.format_changed("Reopened:", &task)
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the task does not exist or the store fails.
pub fn delete(ctx: &CommandContext<'_>, id: TaskId) -> Result<String, TaskhintError> {
    let task = ctx.owned_task(id)?;
    ctx.store.delete_task(id)?;

    match ctx.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "deleted": true,
            "id": id,
            "title": task.title,
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "{} {} (ID: {})",
            "Deleted:".red().bold(),
            task.title,
            id.to_string().dimmed()
        )),
    }
}

fn agenda_view(
    ctx: &CommandContext<'_>,
    group: AgendaGroup,
    title: &str,
) -> Result<String, TaskhintError> {
    let tasks = ctx.store.tasks_for_owner(ctx.owner)?;
    let agenda = Agenda::build(tasks, ctx.now);
    format_tasks(agenda.group(group), title, ctx.now, ctx.format)
}

/// Execute agenda command, showing all three buckets at once
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn agenda(ctx: &CommandContext<'_>) -> Result<String, TaskhintError> {
    let tasks = ctx.store.tasks_for_owner(ctx.owner)?;
    format_agenda(&Agenda::build(tasks, ctx.now), ctx.now, ctx.format)
}

/// Execute today command
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn today(ctx: &CommandContext<'_>) -> Result<String, TaskhintError> {
    agenda_view(ctx, AgendaGroup::Today, "Today")
}

/// Execute overdue command
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn overdue(ctx: &CommandContext<'_>) -> Result<String, TaskhintError> {
    agenda_view(ctx, AgendaGroup::Overdue, "Overdue")
}

/// Execute upcoming command
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn upcoming(ctx: &CommandContext<'_>) -> Result<String, TaskhintError> {
    agenda_view(ctx, AgendaGroup::Upcoming, "Upcoming")
}

/// Execute tasks command
///
/// # Errors
///
/// Returns an error if the list does not exist or the store fails.
pub fn tasks(ctx: &CommandContext<'_>, args: &TasksArgs) -> Result<String, TaskhintError> {
    let title = match args.list {
        Some(list_id) => {
            let list = ctx
                .store
                .lists_for_owner(ctx.owner)?
                .into_iter()
                .find(|l| l.id == list_id)
                .ok_or_else(|| TaskhintError::NotFound(format!("list {list_id}")))?;
            list.name
        },
        None => "Tasks".to_string(),
    };

    let tasks: Vec<Task> = ctx
        .store
        .tasks_for_owner(ctx.owner)?
        .into_iter()
        .filter(|t| args.all || !t.is_completed())
        .filter(|t| args.list.map_or(true, |id| t.list_id == id))
        .collect();

    format_tasks(&tasks, &title, ctx.now, ctx.format)
}

/// Execute search command
///
/// Searches open task titles, or list names with `--lists`. A blank query
/// matches nothing.
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn search(ctx: &CommandContext<'_>, args: &SearchArgs) -> Result<String, TaskhintError> {
    let query = args.query.trim();

    if args.lists {
        let lists: Vec<TaskList> = if query.is_empty() {
            Vec::new()
        } else {
            let needle = query.to_lowercase();
            ctx.store
                .lists_for_owner(ctx.owner)?
                .into_iter()
                .filter(|l| l.name.to_lowercase().contains(&needle))
                .collect()
        };
        return format_lists(&lists, ctx.format);
    }

    let tasks = if query.is_empty() {
        Vec::new()
    } else {
        ctx.store.search_titles(ctx.owner, query)?
    };
    format_tasks(&tasks, &format!("Search: {query}"), ctx.now, ctx.format)
}

/// Execute stats command
///
/// # Errors
///
/// Returns an error if the store fails or output formatting fails.
pub fn stats(ctx: &CommandContext<'_>) -> Result<String, TaskhintError> {
    let tasks = ctx.store.tasks_for_owner(ctx.owner)?;
    let trend = CompletionTrend::calculate(&tasks, ctx.now.date());
    log::debug!("stats: {} of {} tasks completed", trend.completed, trend.total);
    format_stats(&trend, ctx.format)
}
