//! Natural language annotation for task entry.
//!
//! This module infers structured fields from task text like:
//! - "Dentist at 4pm" (time 16:00)
//! - "Renew passport, urgent" (High priority)
//! - "Clean garage whenever" (Low priority)

mod annotator;
mod keywords;
pub mod merge;

pub use annotator::{
    annotate, infer_time, AnnotateError, Annotation, Annotator, DEFAULT_MAX_INPUT_BYTES,
};
pub use keywords::{KeywordError, KeywordGroup, PriorityKeywords, PriorityLevel, UnknownPriority};
