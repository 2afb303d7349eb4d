//! Grouping open tasks into overdue, today, and upcoming.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::types::Task;

/// Agenda bucket for an open task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgendaGroup {
    /// Due date and time have passed.
    Overdue,
    /// Due later today.
    Today,
    /// Due after today.
    Upcoming,
}

/// Bucket `task` relative to `now`. Completed tasks belong to no bucket.
#[must_use]
pub fn classify(task: &Task, now: NaiveDateTime) -> Option<AgendaGroup> {
    if task.is_completed() {
        return None;
    }
    if task.is_overdue(now) {
        Some(AgendaGroup::Overdue)
    } else if task.due_date == now.date() {
        Some(AgendaGroup::Today)
    } else {
        Some(AgendaGroup::Upcoming)
    }
}

/// Open tasks split into buckets, each sorted by due date then time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Agenda {
    pub overdue: Vec<Task>,
    pub today: Vec<Task>,
    pub upcoming: Vec<Task>,
}

impl Agenda {
    #[must_use]
    pub fn build(tasks: impl IntoIterator<Item = Task>, now: NaiveDateTime) -> Self {
        let mut agenda = Self::default();
        for task in tasks {
            match classify(&task, now) {
                Some(AgendaGroup::Overdue) => agenda.overdue.push(task),
                Some(AgendaGroup::Today) => agenda.today.push(task),
                Some(AgendaGroup::Upcoming) => agenda.upcoming.push(task),
                None => {},
            }
        }
        for bucket in [&mut agenda.overdue, &mut agenda.today, &mut agenda.upcoming] {
            bucket.sort_by_key(|t| (t.due_date, t.time, t.id));
        }
        agenda
    }

    /// Tasks in one bucket.
    #[must_use]
    pub fn group(&self, group: AgendaGroup) -> &[Task] {
        match group {
            AgendaGroup::Overdue => &self.overdue,
            AgendaGroup::Today => &self.today,
            AgendaGroup::Upcoming => &self.upcoming,
        }
    }
}
