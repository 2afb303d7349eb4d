//! taskhint - a to-do CLI that reads times and priorities out of task text
//!
//! The annotator in [`features::nlp`] turns text like "Call the bank at 3pm,
//! urgent" into a time of day and a priority. The rest of the crate stores
//! tasks in SQLite and exposes them through a CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskhintError;
pub use features::nlp::{annotate, Annotation, Annotator, PriorityLevel};
pub use storage::Database;
