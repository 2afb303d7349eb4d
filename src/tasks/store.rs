//! Persistence seam for tasks and lists.

use crate::error::TaskhintError;

use super::types::{ListId, NewTask, Task, TaskId, TaskList, TaskStatus, TaskUpdate};

/// Storage for tasks and lists.
///
/// Commands only talk to this trait; `storage::Database` is the SQLite
/// implementation.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    /// Persist a new task and return it with its generated id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the list does not exist or belongs to someone else.
    fn create_task(&self, task: NewTask) -> Result<Task, TaskhintError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no task has this id.
    fn get_task(&self, id: TaskId) -> Result<Task, TaskhintError>;

    /// Replace a task's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the task or the target list does not exist.
    fn update_task(&self, id: TaskId, update: TaskUpdate) -> Result<Task, TaskhintError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no task has this id.
    fn set_status(&self, id: TaskId, status: TaskStatus) -> Result<Task, TaskhintError>;

    /// # Errors
    ///
    /// Returns `NotFound` if no task has this id.
    fn delete_task(&self, id: TaskId) -> Result<(), TaskhintError>;

    /// All tasks owned by `owner`, in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn tasks_for_owner(&self, owner: &str) -> Result<Vec<Task>, TaskhintError>;

    /// Open tasks of `owner` whose title contains `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn search_titles(&self, owner: &str, query: &str) -> Result<Vec<Task>, TaskhintError>;

    /// The Inbox followed by the lists `owner` created.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn lists_for_owner(&self, owner: &str) -> Result<Vec<TaskList>, TaskhintError>;

    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank.
    fn create_list(&self, owner: &str, name: &str) -> Result<TaskList, TaskhintError>;

    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or the Inbox, `NotFound` for
    /// an unknown id.
    fn rename_list(&self, id: ListId, name: &str) -> Result<TaskList, TaskhintError>;

    /// Delete a list, moving its tasks to the Inbox.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the Inbox, `NotFound` for an unknown id.
    fn remove_list(&self, id: ListId) -> Result<(), TaskhintError>;
}
