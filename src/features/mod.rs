//! Feature implementations for taskhint.
//!
//! - Natural language annotation of task text
//! - Completion statistics over the last week

pub mod nlp;
pub mod stats;
