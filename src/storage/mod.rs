//! Storage layer for taskhint.
//!
//! This module provides SQLite-based persistence for tasks and lists through
//! the [`crate::tasks::TaskStore`] trait.

mod database;
mod migrations;
mod tasks;

pub use database::Database;
