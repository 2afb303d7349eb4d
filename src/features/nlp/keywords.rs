//! Priority levels and the keyword table used to infer them.
//!
//! The table is data: an ordered list of `(level, keywords)` groups. The
//! canonical table checks High, then Medium, then Low, and the last group
//! that matches decides the level.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityLevel {
    /// No priority set.
    #[default]
    None,
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl PriorityLevel {
    /// The label stored on task records, e.g. `"High Priority"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "No Priority",
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
        }
    }

    /// `None` for [`PriorityLevel::None`], otherwise `Some(self)`.
    #[must_use]
    pub const fn as_option(self) -> Option<Self> {
        match self {
            Self::None => None,
            level => Some(level),
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Error returned when a string names no priority level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority '{0}' (expected none, low, medium or high)")]
pub struct UnknownPriority(pub String);

impl FromStr for PriorityLevel {
    type Err = UnknownPriority;

    /// Accepts stored labels ("High Priority") and short names ("high").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let name = lowered.strip_suffix(" priority").unwrap_or(&lowered);
        match name {
            "none" | "no" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(UnknownPriority(s.to_string())),
        }
    }
}

impl TryFrom<String> for PriorityLevel {
    type Error = UnknownPriority;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PriorityLevel> for String {
    fn from(level: PriorityLevel) -> Self {
        level.label().to_string()
    }
}

/// One level and the phrases that imply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup {
    /// Level inferred when any keyword matches.
    pub level: PriorityLevel,
    /// Phrases matched as case-insensitive substrings.
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    fn new(level: PriorityLevel, keywords: &[&str]) -> Self {
        Self {
            level,
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        }
    }
}

/// Reasons a keyword table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeywordError {
    /// The table has no groups.
    #[error("priority keyword table is empty")]
    Empty,
    /// `none` is the absence of a match and cannot be inferred.
    #[error("priority keyword table cannot contain the 'none' level")]
    NoneLevel,
    /// A level appears in more than one group.
    #[error("priority level '{0}' appears more than once")]
    DuplicateLevel(PriorityLevel),
    /// A blank keyword would match every text.
    #[error("priority level '{0}' has a blank keyword")]
    BlankKeyword(PriorityLevel),
}

/// A validated, ordered keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<KeywordGroup>", into = "Vec<KeywordGroup>")]
pub struct PriorityKeywords {
    groups: Vec<KeywordGroup>,
}

static CANONICAL: Lazy<PriorityKeywords> = Lazy::new(|| PriorityKeywords {
    groups: vec![
        KeywordGroup::new(
            PriorityLevel::High,
            &[
                "urgent",
                "high priority",
                "asap",
                "immediate",
                "critical",
                "top priority",
                "important",
                "emergency",
                "rush",
                "stat",
                "as soon as possible",
                "right away",
                "need immediately",
                "priority one",
                "expedite",
            ],
        ),
        KeywordGroup::new(
            PriorityLevel::Medium,
            &[
                "medium priority",
                "important",
                "moderate",
                "normal priority",
                "regular",
                "need soon",
                "not urgent",
                "should",
                "preferably",
                "priority two",
                "not critical",
            ],
        ),
        KeywordGroup::new(
            PriorityLevel::Low,
            &[
                "low priority",
                "whenever",
                "no rush",
                "minor",
                "unimportant",
                "optional",
                "can wait",
                "low",
                "not important",
                "when possible",
                "no hurry",
                "at your convenience",
                "no deadline",
                "whenever possible",
                "priority three",
            ],
        ),
    ],
});

impl PriorityKeywords {
    /// Validate a table. Keywords are stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, contains the `none` level,
    /// repeats a level, or has a blank keyword.
    pub fn new(groups: Vec<KeywordGroup>) -> Result<Self, KeywordError> {
        if groups.is_empty() {
            return Err(KeywordError::Empty);
        }

        let mut seen = Vec::with_capacity(groups.len());
        let mut normalized = Vec::with_capacity(groups.len());
        for group in groups {
            if group.level == PriorityLevel::None {
                return Err(KeywordError::NoneLevel);
            }
            if seen.contains(&group.level) {
                return Err(KeywordError::DuplicateLevel(group.level));
            }
            if group.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(KeywordError::BlankKeyword(group.level));
            }
            seen.push(group.level);
            normalized.push(KeywordGroup {
                level: group.level,
                keywords: group.keywords.iter().map(|k| k.to_lowercase()).collect(),
            });
        }

        Ok(Self { groups: normalized })
    }

    /// The built-in High, Medium, Low table.
    #[must_use]
    pub fn canonical() -> Self {
        CANONICAL.clone()
    }

    /// Shared reference to the built-in table.
    #[must_use]
    pub fn canonical_ref() -> &'static Self {
        &CANONICAL
    }

    /// Groups in check order.
    #[must_use]
    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Infer a level from `text`.
    ///
    /// Every group is checked in order and each match overwrites the
    /// previous one, so the last matching group wins. With the canonical
    /// table "urgent, but no rush" is `Low`, not `High`.
    #[must_use]
    pub fn infer(&self, text: &str) -> PriorityLevel {
        let text = text.to_lowercase();
        let mut level = PriorityLevel::None;
        for group in &self.groups {
            if group.keywords.iter().any(|k| text.contains(k.as_str())) {
                level = group.level;
            }
        }
        level
    }
}

impl Default for PriorityKeywords {
    fn default() -> Self {
        Self::canonical()
    }
}

impl TryFrom<Vec<KeywordGroup>> for PriorityKeywords {
    type Error = KeywordError;

    fn try_from(groups: Vec<KeywordGroup>) -> Result<Self, Self::Error> {
        Self::new(groups)
    }
}

impl From<PriorityKeywords> for Vec<KeywordGroup> {
    fn from(keywords: PriorityKeywords) -> Self {
        keywords.groups
    }
}
