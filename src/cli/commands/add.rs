//! Add and edit commands.
//!
//! Both annotate the task's title and description and merge the inference
//! with what the user gave: inferred values first, then explicit ones, then
//! defaults.

use std::fmt::Write;

use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;
use serde_json::json;

use super::CommandContext;
use crate::cli::args::{AddArgs, EditArgs, OutputFormat};
use crate::core::parse_due_date;
use crate::error::TaskhintError;
use crate::features::nlp::merge::{annotation_text, resolve, UserChoices};
use crate::features::nlp::{Annotation, Annotator};
use crate::tasks::{NewTask, Task, TaskId, TaskUpdate, INBOX_LIST_ID};

/// Annotate title and description, falling back to an empty annotation
/// when the text is over the annotator's cap.
fn annotate_fields(annotator: &Annotator, title: &str, description: &str) -> Annotation {
    let text = annotation_text(title, description);
    match annotator.try_annotate(&text) {
        Ok(annotation) => annotation,
        Err(e) => {
            log::warn!("{e}; storing the task without inferred fields");
            Annotation::default()
        },
    }
}

fn parse_due(input: &str, today: NaiveDate) -> Result<NaiveDate, TaskhintError> {
    parse_due_date(input, today)
        .ok_or_else(|| TaskhintError::InvalidInput(format!("unrecognized due date '{input}'")))
}

fn clean_title(title: &str) -> Result<String, TaskhintError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskhintError::InvalidInput(
            "task title cannot be empty".to_string(),
        ));
    }
    Ok(title.to_string())
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the title is blank, the due date is not understood,
/// the list does not exist, or the store fails.
pub fn add(ctx: &CommandContext<'_>, args: AddArgs) -> Result<String, TaskhintError> {
    let title = clean_title(&args.title)?;
    let description = args.description.trim().to_string();
    let due_date = match args.due.as_deref() {
        Some(due) => parse_due(due, ctx.now.date())?,
        None => ctx.now.date(),
    };

    let annotation = annotate_fields(ctx.annotator, &title, &description);
    let choices = UserChoices {
        time: args.time,
        priority: args.priority.unwrap_or_default(),
    };
    let resolved = resolve(&annotation, &choices);
    log::debug!("add: inferred {annotation:?}, resolved {resolved:?}");

    let new_task = NewTask {
        title,
        description,
        due_date,
        time: resolved.time,
        priority: resolved.priority,
        owner: ctx.owner.to_string(),
        list_id: args.list.unwrap_or(INBOX_LIST_ID),
    };

    if args.dry_run {
        return format_outcome(ctx.format, "Would create:", &new_task, None, &annotation);
    }

    let task = ctx.store.create_task(new_task)?;
    log::info!("created task {}", task.id);
    format_outcome(ctx.format, "Created:", &task, Some(task.id), &annotation)
}

/// Execute the edit command.
///
/// The stored time and priority stand in for the user's picks, so they are
/// kept unless the edited text implies new ones.
///
/// # Errors
///
/// Returns an error if the task does not exist, the new title is blank, the
/// due date is not understood, or the store fails.
pub fn edit(ctx: &CommandContext<'_>, args: EditArgs) -> Result<String, TaskhintError> {
    let task = ctx.owned_task(args.id)?;

    let title = match args.title.as_deref() {
        Some(title) => clean_title(title)?,
        None => task.title.clone(),
    };
    let description = args
        .description
        .map_or_else(|| task.description.clone(), |d| d.trim().to_string());
    let due_date = match args.due.as_deref() {
        Some(due) => parse_due(due, ctx.now.date())?,
        None => task.due_date,
    };

    let annotation = annotate_fields(ctx.annotator, &title, &description);
    let choices = UserChoices {
        time: Some(args.time.unwrap_or(task.time)),
        priority: args.priority.unwrap_or(task.priority),
    };
    let resolved = resolve(&annotation, &choices);

    let update = TaskUpdate {
        title,
        description,
        due_date,
        time: resolved.time,
        priority: resolved.priority,
        list_id: args.list.unwrap_or(task.list_id),
    };

    let updated = ctx.store.update_task(args.id, update)?;
    log::info!("updated task {}", updated.id);
    format_outcome(ctx.format, "Updated:", &updated, Some(updated.id), &annotation)
}

/// Fields shared by created, previewed, and updated tasks.
trait TaskFields: Serialize {
    fn fields(&self) -> (&str, NaiveDate, String, &'static str);
}

impl TaskFields for Task {
    fn fields(&self) -> (&str, NaiveDate, String, &'static str) {
        (&self.title, self.due_date, self.time.to_string(), self.priority.label())
    }
}

impl TaskFields for NewTask {
    fn fields(&self) -> (&str, NaiveDate, String, &'static str) {
        (&self.title, self.due_date, self.time.to_string(), self.priority.label())
    }
}

fn format_outcome<T: TaskFields>(
    format: OutputFormat,
    label: &str,
    task: &T,
    id: Option<TaskId>,
    annotation: &Annotation,
) -> Result<String, TaskhintError> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "saved": id.is_some(),
                "task": task,
                "inferred": annotation,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        },
        OutputFormat::Pretty => {
            let (title, due_date, time, priority) = task.fields();
            let mut output = format!("{} {}", label.green().bold(), title);
            if let Some(id) = id {
                let _ = write!(output, " (ID: {})", id.to_string().dimmed());
            }
            output.push('\n');

            let _ = writeln!(output, "  {}: {} {}", "Due".dimmed(), due_date, time);
            let _ = writeln!(output, "  {}: {}", "Priority".dimmed(), priority);

            if !annotation.is_empty() {
                let mut inferred = Vec::new();
                if let Some(t) = annotation.inferred_time {
                    inferred.push(format!("time {t}"));
                }
                if let Some(p) = annotation.inferred_priority.as_option() {
                    inferred.push(format!("priority {p}"));
                }
                let _ = writeln!(
                    output,
                    "  {}: {}",
                    "Inferred".dimmed(),
                    inferred.join(", ").cyan()
                );
            }

            Ok(output.trim_end().to_string())
        },
    }
}
