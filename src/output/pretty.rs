use chrono::NaiveDateTime;
use colored::{ColoredString, Colorize};

use crate::features::nlp::{Annotation, PriorityLevel};
use crate::features::stats::CompletionTrend;
use crate::tasks::{Agenda, Task, TaskList, TaskStatus};

fn status_icon(task: &Task, now: NaiveDateTime) -> ColoredString {
    match task.status {
        TaskStatus::Completed => "[x]".green(),
        TaskStatus::Uncompleted if task.is_overdue(now) => "[!]".red(),
        TaskStatus::Uncompleted => "[ ]".white(),
    }
}

fn priority_badge(priority: PriorityLevel) -> Option<ColoredString> {
    match priority {
        PriorityLevel::None => None,
        PriorityLevel::Low => Some("low".blue()),
        PriorityLevel::Medium => Some("medium".yellow()),
        PriorityLevel::High => Some("high".red().bold()),
    }
}

fn task_line(task: &Task, now: NaiveDateTime) -> String {
    let title = match task.status {
        TaskStatus::Completed => task.title.dimmed().to_string(),
        TaskStatus::Uncompleted => task.title.bold().to_string(),
    };

    let mut line = format!(
        "{} {} {}",
        status_icon(task, now),
        format!("#{}", task.id).dimmed(),
        title
    );

    line.push_str(&format!(
        "  {} {}",
        task.due_date.to_string().yellow(),
        task.time.to_string().yellow()
    ));

    if let Some(badge) = priority_badge(task.priority) {
        line.push_str(&format!("  {badge}"));
    }

    line
}

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[Task], title: &str, now: NaiveDateTime) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No items");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task, now));
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task, now: NaiveDateTime) -> String {
    let mut output = format!("{} {}\n", status_icon(task, now), task.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!("  {}: {}\n", "Status".dimmed(), task.status));

    if !task.description.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Notes".dimmed(), task.description));
    }

    output.push_str(&format!(
        "  {}: {} {}\n",
        "Due".dimmed(),
        task.due_date,
        task.time
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        task.priority.label()
    ));
    output.push_str(&format!("  {}: {}\n", "List".dimmed(), task.list_id));

    if task.is_overdue(now) {
        output.push_str(&format!("  {}\n", "Overdue".red().bold()));
    }

    output
}

/// Format an annotation as pretty output
pub fn format_annotation_pretty(text: &str, annotation: &Annotation) -> String {
    let mut output = format!("{}\n", text.bold());

    let time = annotation
        .inferred_time
        .map_or_else(|| "-".dimmed().to_string(), |t| t.to_string().yellow().to_string());
    output.push_str(&format!("  {}: {}\n", "Time".dimmed(), time));

    let priority = priority_badge(annotation.inferred_priority)
        .map_or_else(|| "-".dimmed().to_string(), |b| b.to_string());
    output.push_str(&format!("  {}: {}\n", "Priority".dimmed(), priority));

    output
}

/// Format a list of task lists as pretty output
pub fn format_lists_pretty(lists: &[TaskList]) -> String {
    if lists.is_empty() {
        return "Lists (0)\n  No lists".to_string();
    }

    let mut output = format!("Lists ({})\n", lists.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for list in lists {
        output.push_str(&format!("  {}\n", format_list_pretty(list)));
    }

    output
}

/// Format a single task list as pretty output
pub fn format_list_pretty(list: &TaskList) -> String {
    let name = if list.is_inbox() {
        list.name.cyan().bold()
    } else {
        list.name.bold()
    };
    format!("{} {}", format!("#{}", list.id).dimmed(), name)
}

/// Format the agenda as pretty output, one section per bucket
pub fn format_agenda_pretty(agenda: &Agenda, now: NaiveDateTime) -> String {
    [
        ("Overdue", &agenda.overdue),
        ("Today", &agenda.today),
        ("Upcoming", &agenda.upcoming),
    ]
    .into_iter()
    .map(|(title, tasks)| format_tasks_pretty(tasks, title, now))
    .collect::<Vec<_>>()
    .join("\n\n")
}

// The filled width is at most `width`, and rates stay within 0-100.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn progress_bar(rate: f64, width: usize) -> String {
    let filled = ((rate / 100.0).clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format the 7-day completion trend, one row per day
pub fn format_stats_pretty(trend: &CompletionTrend) -> String {
    let mut output = format!("{}\n", "Completion (last 7 days)".bold());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for day in &trend.days {
        output.push_str(&format!(
            "  {}  {}  {:>2}/{:<2} {:>5.1}%\n",
            day.date.format("%m/%d").to_string().dimmed(),
            progress_bar(day.rate, 10).green(),
            day.completed,
            day.total,
            day.rate
        ));
    }

    output.push_str(&format!(
        "  {}: {}/{} completed ({:.1}%)\n",
        "Total".dimmed(),
        trend.completed,
        trend.total,
        trend.rate
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeOfDay;
    use crate::features::nlp::annotate;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn make_task(title: &str, time: &str, status: TaskStatus) -> Task {
        Task {
            id: 3,
            title: title.to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            time: time.parse::<TimeOfDay>().unwrap(),
            priority: PriorityLevel::None,
            status,
            owner: "alice".to_string(),
            list_id: 1,
        }
    }

    #[test]
    fn test_format_tasks_pretty_empty_list() {
        let output = format_tasks_pretty(&[], "Today", now());

        assert!(output.contains("Today (0 items)"));
        assert!(output.contains("No items"));
    }

    #[test]
    fn test_format_tasks_pretty_open_task() {
        let tasks = vec![make_task("Buy groceries", "18:00", TaskStatus::Uncompleted)];
        let output = format_tasks_pretty(&tasks, "Inbox", now());

        assert!(output.contains("Inbox (1 items)"));
        assert!(output.contains("[ ]"));
        assert!(output.contains("Buy groceries"));
        assert!(output.contains("2025-03-14"));
        assert!(output.contains("18:00"));
    }

    #[test]
    fn test_format_tasks_pretty_marks_overdue() {
        let tasks = vec![make_task("Missed call", "09:00", TaskStatus::Uncompleted)];
        let output = format_tasks_pretty(&tasks, "Today", now());

        assert!(output.contains("[!]"));
    }

    #[test]
    fn test_format_tasks_pretty_completed() {
        let tasks = vec![make_task("Done", "09:00", TaskStatus::Completed)];
        let output = format_tasks_pretty(&tasks, "Today", now());

        assert!(output.contains("[x]"));
        assert!(!output.contains("[!]"));
    }

    #[test]
    fn test_format_tasks_pretty_priority() {
        let mut task = make_task("Ship release", "18:00", TaskStatus::Uncompleted);
        task.priority = PriorityLevel::High;
        let output = format_tasks_pretty(&[task], "Today", now());

        assert!(output.contains("high"));
    }

    #[test]
    fn test_format_task_pretty_details() {
        let mut task = make_task("Call bank", "08:00", TaskStatus::Uncompleted);
        task.description = "about the loan".to_string();
        task.priority = PriorityLevel::Medium;
        let output = format_task_pretty(&task, now());

        assert!(output.contains("Call bank"));
        assert!(output.contains("about the loan"));
        assert!(output.contains("Medium Priority"));
        assert!(output.contains("Overdue"));
    }

    #[test]
    fn test_format_annotation_pretty() {
        let output = format_annotation_pretty("lunch at 1pm", &annotate("lunch at 1pm"));

        assert!(output.contains("lunch at 1pm"));
        assert!(output.contains("13:00"));
    }

    #[test]
    fn test_format_lists_pretty() {
        let lists = vec![
            TaskList {
                id: 1,
                name: "Inbox".to_string(),
                owner: None,
            },
            TaskList {
                id: 2,
                name: "Work".to_string(),
                owner: Some("alice".to_string()),
            },
        ];
        let output = format_lists_pretty(&lists);

        assert!(output.contains("Lists (2)"));
        assert!(output.contains("Inbox"));
        assert!(output.contains("Work"));
        assert!(output.contains("#2"));
    }

    #[test]
    fn test_format_agenda_pretty_sections() {
        let output = format_agenda_pretty(&Agenda::default(), now());

        assert!(output.contains("Overdue (0 items)"));
        assert!(output.contains("Today (0 items)"));
        assert!(output.contains("Upcoming (0 items)"));
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(50.0, 4), "██░░");
        assert_eq!(progress_bar(100.0, 4), "████");
        assert_eq!(progress_bar(250.0, 4), "████");
    }

    #[test]
    fn test_format_stats_pretty_rows() {
        let mut done = make_task("Done", "09:00", TaskStatus::Completed);
        done.id = 4;
        let open = make_task("Open", "09:00", TaskStatus::Uncompleted);
        let trend = CompletionTrend::calculate(&[done, open], now().date());
        let output = format_stats_pretty(&trend);

        assert!(output.contains("Completion (last 7 days)"));
        assert!(output.contains("03/08"));
        assert!(output.contains("03/14"));
        assert!(output.contains("50.0%"));
        assert!(output.contains("1/2 completed"));
    }
}
