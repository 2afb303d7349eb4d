//! Merging an annotation with the values a user picked.
//!
//! Inferred values win over explicit ones, and explicit values win over
//! defaults. A priority of `None` counts as "nothing inferred".

use super::annotator::Annotation;
use super::keywords::PriorityLevel;
use crate::core::TimeOfDay;

/// Separator placed between title and description before annotating.
pub const TEXT_SEPARATOR: &str = ". ";

/// Values the user set on the form, or that an edited task already had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserChoices {
    /// Time picked by the user, `None` if never touched.
    pub time: Option<TimeOfDay>,
    /// Priority picked by the user.
    pub priority: PriorityLevel,
}

/// Final field values to store on a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFields {
    /// Stored time of day.
    pub time: TimeOfDay,
    /// Stored priority.
    pub priority: PriorityLevel,
}

/// Join a task's title and description into annotator input.
#[must_use]
pub fn annotation_text(title: &str, description: &str) -> String {
    format!("{title}{TEXT_SEPARATOR}{description}")
}

/// Apply the precedence rules to every annotated field.
#[must_use]
pub fn resolve(annotation: &Annotation, choices: &UserChoices) -> ResolvedFields {
    ResolvedFields {
        time: prefer_inferred(annotation.inferred_time, choices.time, TimeOfDay::MIDNIGHT),
        priority: prefer_inferred(
            annotation.inferred_priority.as_option(),
            choices.priority.as_option(),
            PriorityLevel::None,
        ),
    }
}

fn prefer_inferred<T>(inferred: Option<T>, explicit: Option<T>, default: T) -> T {
    inferred.or(explicit).unwrap_or(default)
}
