//! SQLite-backed [`TaskStore`].

use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, OptionalExtension, Row};

use crate::core::TimeOfDay;
use crate::error::TaskhintError;
use crate::features::nlp::PriorityLevel;
use crate::tasks::{
    ListId, NewTask, Task, TaskId, TaskList, TaskStatus, TaskStore, TaskUpdate, INBOX_LIST_ID,
};

use super::Database;

const TASK_COLUMNS: &str =
    "id, title, description, due_date, time, priority, status, owner, list_id";

fn text_conversion<E>(idx: usize) -> impl FnOnce(E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    move |e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let due_date: String = row.get(3)?;
    let time: String = row.get(4)?;
    let priority: String = row.get(5)?;
    let status: String = row.get(6)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: NaiveDate::parse_from_str(&due_date, "%Y-%m-%d").map_err(text_conversion(3))?,
        time: time.parse::<TimeOfDay>().map_err(text_conversion(4))?,
        priority: priority.parse::<PriorityLevel>().map_err(text_conversion(5))?,
        status: status.parse::<TaskStatus>().map_err(text_conversion(6))?,
        owner: row.get(7)?,
        list_id: row.get(8)?,
    })
}

fn list_from_row(row: &Row<'_>) -> rusqlite::Result<TaskList> {
    Ok(TaskList {
        id: row.get(0)?,
        name: row.get(1)?,
        owner: row.get(2)?,
    })
}

fn clean_name(name: &str) -> Result<&str, TaskhintError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TaskhintError::InvalidInput("list name cannot be blank".to_string()));
    }
    Ok(name)
}

fn task_not_found(id: TaskId) -> TaskhintError {
    TaskhintError::NotFound(format!("task {id}"))
}

impl Database {
    fn ensure_list_usable(&self, list_id: ListId, owner: &str) -> Result<(), TaskhintError> {
        let found: Option<i64> = self
            .connection()
            .query_row(
                "SELECT id FROM lists WHERE id = ?1 AND (owner IS NULL OR owner = ?2)",
                params![list_id, owner],
                |row| row.get(0),
            )
            .optional()?;

        found
            .map(|_| ())
            .ok_or_else(|| TaskhintError::NotFound(format!("list {list_id}")))
    }

    fn get_list(&self, id: ListId) -> Result<TaskList, TaskhintError> {
        self.connection()
            .query_row(
                "SELECT id, name, owner FROM lists WHERE id = ?1",
                params![id],
                list_from_row,
            )
            .optional()?
            .ok_or_else(|| TaskhintError::NotFound(format!("list {id}")))
    }

    fn query_tasks(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Task>, TaskhintError> {
        let mut stmt = self.connection().prepare(sql)?;
        let rows = stmt.query_map(params, task_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl TaskStore for Database {
    fn create_task(&self, task: NewTask) -> Result<Task, TaskhintError> {
        self.ensure_list_usable(task.list_id, &task.owner)?;

        self.connection().execute(
            "INSERT INTO tasks (title, description, due_date, time, priority, status, owner, list_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                task.title,
                task.description,
                task.due_date.format("%Y-%m-%d").to_string(),
                task.time.to_string(),
                task.priority.label(),
                TaskStatus::Uncompleted.as_str(),
                task.owner,
                task.list_id,
            ],
        )?;

        let id = self.connection().last_insert_rowid();
        log::debug!("created task {id} for {}", task.owner);
        self.get_task(id)
    }

    fn get_task(&self, id: TaskId) -> Result<Task, TaskhintError> {
        self.connection()
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            )
            .optional()?
            .ok_or_else(|| task_not_found(id))
    }

    fn update_task(&self, id: TaskId, update: TaskUpdate) -> Result<Task, TaskhintError> {
        let current = self.get_task(id)?;
        self.ensure_list_usable(update.list_id, &current.owner)?;

        self.connection().execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, due_date = ?3, time = ?4, priority = ?5, list_id = ?6
             WHERE id = ?7",
            params![
                update.title,
                update.description,
                update.due_date.format("%Y-%m-%d").to_string(),
                update.time.to_string(),
                update.priority.label(),
                update.list_id,
                id,
            ],
        )?;

        log::debug!("updated task {id}");
        self.get_task(id)
    }

    fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Task, TaskhintError> {
        let changed = self.connection().execute(
            "UPDATE tasks SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(task_not_found(id));
        }

        log::debug!("task {id} is now {status}");
        self.get_task(id)
    }

    fn delete_task(&self, id: TaskId) -> Result<(), TaskhintError> {
        let changed = self
            .connection()
            .execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(task_not_found(id));
        }

        log::debug!("deleted task {id}");
        Ok(())
    }

    fn tasks_for_owner(&self, owner: &str) -> Result<Vec<Task>, TaskhintError> {
        self.query_tasks(
            &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE owner = ?1 ORDER BY id"),
            &[&owner],
        )
    }

    fn search_titles(&self, owner: &str, query: &str) -> Result<Vec<Task>, TaskhintError> {
        // SQLite's lower() only folds ASCII, so match in Rust.
        let needle = query.to_lowercase();
        let open = self.query_tasks(
            &format!(
                "SELECT {TASK_COLUMNS} FROM tasks WHERE owner = ?1 AND status = ?2 ORDER BY id"
            ),
            &[&owner, &TaskStatus::Uncompleted.as_str()],
        )?;

        Ok(open
            .into_iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .collect())
    }

    fn lists_for_owner(&self, owner: &str) -> Result<Vec<TaskList>, TaskhintError> {
        let mut stmt = self.connection().prepare(
            "SELECT id, name, owner FROM lists
             WHERE id = ?1 OR owner = ?2
             ORDER BY id != ?1, id",
        )?;
        let rows = stmt.query_map(params![INBOX_LIST_ID, owner], list_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    fn create_list(&self, owner: &str, name: &str) -> Result<TaskList, TaskhintError> {
        let name = clean_name(name)?;
        self.connection().execute(
            "INSERT INTO lists (name, owner) VALUES (?1, ?2)",
            params![name, owner],
        )?;

        let id = self.connection().last_insert_rowid();
        log::debug!("created list {id} '{name}' for {owner}");
        self.get_list(id)
    }

    fn rename_list(&self, id: ListId, name: &str) -> Result<TaskList, TaskhintError> {
        let name = clean_name(name)?;
        if id == INBOX_LIST_ID {
            return Err(TaskhintError::InvalidInput("the Inbox cannot be renamed".to_string()));
        }

        let changed = self.connection().execute(
            "UPDATE lists SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;
        if changed == 0 {
            return Err(TaskhintError::NotFound(format!("list {id}")));
        }

        self.get_list(id)
    }

    fn remove_list(&self, id: ListId) -> Result<(), TaskhintError> {
        if id == INBOX_LIST_ID {
            return Err(TaskhintError::InvalidInput("the Inbox cannot be removed".to_string()));
        }
        self.get_list(id)?;

        let tx = self.connection().unchecked_transaction()?;
        let moved = tx.execute(
            "UPDATE tasks SET list_id = ?1 WHERE list_id = ?2",
            params![INBOX_LIST_ID, id],
        )?;
        tx.execute("DELETE FROM lists WHERE id = ?1", params![id])?;
        tx.commit()?;

        log::debug!("removed list {id}, moved {moved} tasks to the Inbox");
        Ok(())
    }
}
