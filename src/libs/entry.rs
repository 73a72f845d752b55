//! Time entry data model and token parsing helpers.
//!
//! A [`TimeEntry`] is one logged work interval produced by the timesheet
//! parser and consumed once by the submission pipeline. Entries are built
//! by the parser and never mutated afterwards.

use chrono::{NaiveDate, NaiveTime};

/// One logged work interval tied to a date, project and task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntry {
    pub date: NaiveDate,
    pub project: String,
    pub task: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub description: String,
}

impl TimeEntry {
    /// Length of the interval in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Start of the interval as `YYYY-MM-DD HH:MM:SS`, the format the
    /// remote event endpoint expects.
    pub fn start_timestamp(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.start.format("%H:%M:%S"))
    }

    /// End of the interval as `YYYY-MM-DD HH:MM:SS`.
    pub fn end_timestamp(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.end.format("%H:%M:%S"))
    }

    /// Name under which the entry is filed remotely. The service requires
    /// every event to belong to a task, so entries without an explicit task
    /// line are filed under their description.
    pub fn task_name(&self) -> &str {
        if self.task.is_empty() {
            &self.description
        } else {
            &self.task
        }
    }
}

/// Parses a `DDMMYY` or `DDMMYYYY` date token. Two-digit years are taken
/// to be in the 2000s.
pub fn parse_date(token: &str) -> Option<NaiveDate> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (day, month, year) = match token.len() {
        6 => (&token[0..2], &token[2..4], format!("20{}", &token[4..6])),
        8 => (&token[0..2], &token[2..4], token[4..8].to_string()),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Parses a `HH.MM` time-of-day token: one or two hour digits, a dot, one
/// or two minute digits. `9.00` is 09:00, `13.45` is 13:45.
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    let (hours, minutes) = token.split_once('.')?;
    if hours.is_empty() || hours.len() > 2 || !hours.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if minutes.is_empty() || minutes.len() > 2 || !minutes.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}
