//! Task model, agenda grouping, and the storage trait.

pub mod agenda;
mod store;
mod types;

pub use agenda::{classify, Agenda, AgendaGroup};
#[cfg(test)]
pub use store::MockTaskStore;
pub use store::TaskStore;
pub use types::{
    ListId, NewTask, Task, TaskId, TaskList, TaskStatus, TaskUpdate, INBOX_LIST_ID,
};
