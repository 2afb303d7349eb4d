//! Task text annotator.
//!
//! Infers a due time and a priority from free task text like
//! "Call the bank at 3pm, urgent" so the structured fields can be pre-filled.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keywords::{PriorityKeywords, PriorityLevel};
use crate::core::{Meridiem, TimeOfDay};

/// Default cap on annotated input, in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4096;

/// Structured inference produced from task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotation {
    /// Time of day named in the text, e.g. "3pm".
    pub inferred_time: Option<TimeOfDay>,
    /// Priority implied by keywords, `None` if nothing matched.
    pub inferred_priority: PriorityLevel,
}

impl Annotation {
    /// Whether nothing was inferred.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inferred_time.is_none() && self.inferred_priority == PriorityLevel::None
    }
}

/// Errors returned by [`Annotator::try_annotate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    /// The input is longer than the configured cap.
    #[error("input of {len} bytes exceeds the {limit} byte annotation limit")]
    InputTooLarge {
        /// Input length in bytes.
        len: usize,
        /// Configured cap in bytes.
        limit: usize,
    },
}

// Digits are ASCII-only; `\d` would also accept other Unicode digits.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})\s?(am|pm)").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Annotator with a keyword table and an input cap.
///
/// Holds only immutable data, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct Annotator {
    keywords: PriorityKeywords,
    max_input_bytes: usize,
}

impl Annotator {
    /// Create an annotator. A `max_input_bytes` of 0 disables the cap.
    #[must_use]
    pub const fn new(keywords: PriorityKeywords, max_input_bytes: usize) -> Self {
        Self {
            keywords,
            max_input_bytes,
        }
    }

    /// The input cap in bytes (0 = unlimited).
    #[must_use]
    pub const fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }

    /// Annotate `text`, enforcing the input cap.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::InputTooLarge`] if `text` is longer than the
    /// cap. Callers should then treat the task as having no inference.
    pub fn try_annotate(&self, text: &str) -> Result<Annotation, AnnotateError> {
        if self.max_input_bytes > 0 && text.len() > self.max_input_bytes {
            return Err(AnnotateError::InputTooLarge {
                len: text.len(),
                limit: self.max_input_bytes,
            });
        }

        Ok(Annotation {
            inferred_time: infer_time(text),
            inferred_priority: self.keywords.infer(text),
        })
    }

    /// Annotate text that may be missing. Missing text is treated as empty.
    ///
    /// # Errors
    ///
    /// Same as [`Annotator::try_annotate`].
    pub fn annotate_optional(&self, text: Option<&str>) -> Result<Annotation, AnnotateError> {
        self.try_annotate(text.unwrap_or_default())
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(PriorityKeywords::canonical(), DEFAULT_MAX_INPUT_BYTES)
    }
}

/// Annotate `text` with the canonical keyword table and no input cap.
///
/// # Examples
///
/// ```
/// use taskhint::core::TimeOfDay;
/// use taskhint::features::nlp::{annotate, PriorityLevel};
///
/// let a = annotate("Meeting at 3pm, urgent");
/// assert_eq!(a.inferred_time, TimeOfDay::new(15, 0));
/// assert_eq!(a.inferred_priority, PriorityLevel::High);
///
/// assert!(annotate("").is_empty());
/// ```
#[must_use]
pub fn annotate(text: &str) -> Annotation {
    Annotation {
        inferred_time: infer_time(text),
        inferred_priority: PriorityKeywords::canonical_ref().infer(text),
    }
}

/// Find the first `<hour> am|pm` reading in `text`.
///
/// Only the first match counts. If its hour is not a 12-hour clock hour
/// (0 or above 12), no time is inferred even if a later match would be valid.
#[must_use]
pub fn infer_time(text: &str) -> Option<TimeOfDay> {
    let caps = TIME_PATTERN.captures(text)?;
    let hour: u8 = caps.get(1)?.as_str().parse().ok()?;
    let meridiem = Meridiem::parse(caps.get(2)?.as_str())?;
    TimeOfDay::from_12_hour(hour, meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u8, minute: u8) -> Option<TimeOfDay> {
        TimeOfDay::new(hour, minute)
    }

    // ===========
    // Time Tests
    // ===========

    #[test]
    fn test_meeting_at_3pm() {
        assert_eq!(annotate("Meeting at 3pm").inferred_time, hm(15, 0));
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(annotate("Call at 12am").inferred_time, hm(0, 0));
        assert_eq!(annotate("Call at 12pm").inferred_time, hm(12, 0));
    }

    #[test]
    fn test_time_with_space_and_uppercase() {
        assert_eq!(annotate("standup 11 AM").inferred_time, hm(11, 0));
        assert_eq!(annotate("dinner 7 Pm").inferred_time, hm(19, 0));
    }

    #[test]
    fn test_time_without_space_morning() {
        assert_eq!(annotate("gym 6am").inferred_time, hm(6, 0));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(annotate("from 9am to 5pm").inferred_time, hm(9, 0));
    }

    #[test]
    fn test_invalid_hour_is_no_time() {
        assert_eq!(annotate("at 0am").inferred_time, None);
        assert_eq!(annotate("at 13pm").inferred_time, None);
    }

    #[test]
    fn test_invalid_first_match_does_not_fall_through() {
        assert_eq!(annotate("13pm or 2pm").inferred_time, None);
    }

    #[test]
    fn test_three_digit_number_uses_last_two_digits() {
        // "123pm" scans to "23pm", which is not a 12-hour reading
        assert_eq!(annotate("room 123pm").inferred_time, None);
        // "101am" scans to "01am"
        assert_eq!(annotate("room 101am").inferred_time, hm(1, 0));
    }

    #[test]
    fn test_no_time_without_meridiem() {
        assert_eq!(annotate("buy 3 apples").inferred_time, None);
        assert_eq!(annotate("meet at 15:00").inferred_time, None);
        assert_eq!(annotate("pm the team").inferred_time, None);
    }

    #[test]
    fn test_meridiem_inside_word_still_matches() {
        // "3 amazing" contains "3 am"
        assert_eq!(annotate("3 amazing ideas").inferred_time, hm(3, 0));
    }

    #[test]
    fn test_non_ascii_digits_ignored() {
        assert_eq!(annotate("at ٣pm").inferred_time, None);
    }

    // ================
    // Priority Tests
    // ================

    #[test]
    fn test_last_match_wins_across_levels() {
        let a = annotate("urgent but can wait, no rush");
        assert_eq!(a.inferred_priority, PriorityLevel::Low);
    }

    #[test]
    fn test_high_priority_only() {
        assert_eq!(annotate("ASAP: fix prod").inferred_priority, PriorityLevel::High);
    }

    #[test]
    fn test_priority_phrase_across_title_and_description() {
        assert_eq!(
            annotate("Taxes. Not critical this month").inferred_priority,
            PriorityLevel::Medium
        );
    }

    // ================
    // Boundary Tests
    // ================

    #[test]
    fn test_empty_input() {
        let a = annotate("");
        assert_eq!(a, Annotation::default());
        assert_eq!(a.inferred_time, None);
        assert_eq!(a.inferred_priority, PriorityLevel::None);
        assert!(a.is_empty());
    }

    #[test]
    fn test_plain_text_has_no_inference() {
        for text in ["buy bread", "call mom", "   ", "買牛奶", "review PR #42"] {
            assert_eq!(annotate(text), Annotation::default(), "text: {text}");
        }
    }

    #[test]
    fn test_idempotent() {
        let text = "Dentist at 4pm, important";
        assert_eq!(annotate(text), annotate(text));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(annotate("URGENT task at 5 PM"), annotate("urgent task at 5 pm"));
        assert_eq!(
            annotate("URGENT task at 5 PM").inferred_time,
            hm(17, 0)
        );
    }

    // =================
    // Annotator Tests
    // =================

    #[test]
    fn test_default_annotator_matches_free_function() {
        let annotator = Annotator::default();
        let text = "Pay rent 9am no hurry";
        assert_eq!(annotator.try_annotate(text).unwrap(), annotate(text));
        assert_eq!(annotator.max_input_bytes(), DEFAULT_MAX_INPUT_BYTES);
    }

    #[test]
    fn test_input_cap() {
        let annotator = Annotator::new(PriorityKeywords::canonical(), 8);
        assert!(annotator.try_annotate("12345678").is_ok());
        assert_eq!(
            annotator.try_annotate("123456789"),
            Err(AnnotateError::InputTooLarge { len: 9, limit: 8 })
        );
    }

    #[test]
    fn test_zero_cap_is_unlimited() {
        let annotator = Annotator::new(PriorityKeywords::canonical(), 0);
        let long = format!("{} urgent", "x".repeat(100_000));
        let a = annotator.try_annotate(&long).unwrap();
        assert_eq!(a.inferred_priority, PriorityLevel::High);
    }

    #[test]
    fn test_missing_text_is_empty() {
        let annotator = Annotator::default();
        assert_eq!(annotator.annotate_optional(None).unwrap(), Annotation::default());
        assert_eq!(
            annotator.annotate_optional(Some("at 8am")).unwrap().inferred_time,
            hm(8, 0)
        );
    }

    #[test]
    fn test_custom_keywords() {
        use super::super::keywords::KeywordGroup;

        let keywords = PriorityKeywords::new(vec![KeywordGroup {
            level: PriorityLevel::High,
            keywords: vec!["deadline".to_string()],
        }])
        .unwrap();
        let annotator = Annotator::new(keywords, DEFAULT_MAX_INPUT_BYTES);
        let a = annotator.try_annotate("Deadline friday").unwrap();
        assert_eq!(a.inferred_priority, PriorityLevel::High);
        // canonical words no longer apply
        let a = annotator.try_annotate("urgent").unwrap();
        assert_eq!(a.inferred_priority, PriorityLevel::None);
    }

    #[test]
    fn test_annotation_json_shape() {
        let json = serde_json::to_value(annotate("lunch 1pm, optional")).unwrap();
        assert_eq!(json["inferred_time"], "13:00");
        assert_eq!(json["inferred_priority"], "Low Priority");

        let json = serde_json::to_value(annotate("")).unwrap();
        assert!(json["inferred_time"].is_null());
        assert_eq!(json["inferred_priority"], "No Priority");
    }

    #[test]
    fn test_annotator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Annotator>();
    }
}
