//! Time-of-day values, due date parsing, and the overdue predicate.
//!
//! Nothing in here reads the clock. Callers pass `today` or `now` in, so the
//! same inputs always classify the same way.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::TaskhintError;

/// AM/PM marker of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// Noon and after.
    Pm,
}

impl Meridiem {
    /// Parse `am`/`pm` in any letter case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if input.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }
}

/// A wall-clock time with minute precision and no date or zone.
///
/// Serializes as a zero-padded `HH:mm` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// `00:00`, the time given to tasks nobody scheduled.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Create a time, or `None` if the hour or minute is out of range.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// Convert a 12-hour clock hour (1-12) to a 24-hour time on the hour.
    ///
    /// `12am` is midnight and `12pm` is noon. Hours outside 1-12 are not
    /// 12-hour readings and yield `None`.
    #[must_use]
    pub const fn from_12_hour(hour: u8, meridiem: Meridiem) -> Option<Self> {
        if hour == 0 || hour > 12 {
            return None;
        }
        let hour = match meridiem {
            Meridiem::Am if hour == 12 => 0,
            Meridiem::Am => hour,
            Meridiem::Pm if hour == 12 => 12,
            Meridiem::Pm => hour + 12,
        };
        Some(Self { hour, minute: 0 })
    }

    /// Truncate a `NaiveTime` to the minute.
    #[must_use]
    // chrono guarantees hour < 24 and minute < 60
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }

    /// Hour of the day, 0-23.
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of the hour, 0-59.
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TaskhintError;

    /// Parse a zero-padded `HH:mm` string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TaskhintError::InvalidInput(format!("expected HH:mm time, got '{s}'"));

        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }

        let hour = (digits[0] - b'0') * 10 + (digits[1] - b'0');
        let minute = (digits[2] - b'0') * 10 + (digits[3] - b'0');
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TaskhintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Whether a task due at `due_date` + `time` has passed at `now`.
///
/// Earlier days are always overdue. On the due day the stored time is
/// compared against `now` truncated to the minute, so a task due `08:00` is
/// not overdue until `08:01`.
#[must_use]
pub fn is_overdue(due_date: NaiveDate, time: TimeOfDay, now: NaiveDateTime) -> bool {
    let today = now.date();
    due_date < today || (due_date == today && time < TimeOfDay::from_naive_time(now.time()))
}

/// Parse a due date expression relative to `today`.
///
/// Supports:
/// - `today`, `tomorrow`
/// - `monday`, `fri`, etc. (next occurrence, never today)
/// - `next monday` (one week after the next occurrence)
/// - `in 3 days`, `in 2 weeks`
/// - `2024-12-15` (ISO format)
///
/// Returns `None` if the input cannot be parsed.
#[must_use]
pub fn parse_due_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "today" => return Some(today),
        "tomorrow" => return today.checked_add_signed(Duration::days(1)),
        _ => {},
    }

    if let Some(date) = parse_relative_offset(&input, today) {
        return Some(date);
    }

    if let Some(date) = parse_weekday(&input, today) {
        return Some(date);
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d").ok()
}

/// Parse "in X days/weeks" patterns.
fn parse_relative_offset(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.len() != 3 || parts[0] != "in" {
        return None;
    }

    let amount: i64 = parts[1].parse().ok()?;
    let days = match parts[2].trim_end_matches('s') {
        "day" => amount,
        "week" => amount.checked_mul(7)?,
        _ => return None,
    };

    today.checked_add_signed(Duration::try_days(days)?)
}

/// Parse weekday names.
fn parse_weekday(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (is_next, day_str) = input
        .strip_prefix("next ")
        .map_or((false, input), |rest| (true, rest));

    let target = match day_str {
        "monday" | "mon" => Weekday::Mon,
        "tuesday" | "tue" | "tues" => Weekday::Tue,
        "wednesday" | "wed" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" => Weekday::Thu,
        "friday" | "fri" => Weekday::Fri,
        "saturday" | "sat" => Weekday::Sat,
        "sunday" | "sun" => Weekday::Sun,
        _ => return None,
    };

    let mut days_until = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;

    if days_until == 0 {
        days_until = 7;
    }
    if is_next {
        days_until += 7;
    }

    Some(today + Duration::days(days_until))
}
