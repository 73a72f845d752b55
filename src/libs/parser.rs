//! Timesheet text parser.
//!
//! Turns an indentation-structured plain-text diary into an ordered list of
//! [`TimeEntry`] records. The grammar nests by indentation:
//!
//! ```text
//! # date 290125
//!     timesheet
//!         Centurion
//!             9.00 - 12.00 Software design
//!             Commissioning
//!                 13.00 - 17.00 Site visit
//! ```
//!
//! Indentation contract: leading whitespace is measured in spaces with a tab
//! counting as four; the nesting depth of a line is its leading space count
//! divided by four, rounded down. Depth 0 holds `# date DDMMYY` headers,
//! depth 1 the `timesheet` keyword, depth 2 project names, depth 3 task
//! names or time lines (task left empty), depth 4 and deeper time lines
//! under the current task.
//!
//! Parsing is pure and deterministic. Any malformed construct aborts with a
//! [`ParseError`] naming the offending line; nothing is skipped silently.

use crate::libs::entry::{parse_date, parse_time, TimeEntry};
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Number of spaces that make up one nesting level.
pub const INDENT_WIDTH: usize = 4;

const TIMESHEET_KEYWORD: &str = "timesheet";

const DATE_DEPTH: usize = 0;
const KEYWORD_DEPTH: usize = 1;
const PROJECT_DEPTH: usize = 2;
const TASK_DEPTH: usize = 3;

/// A grammar violation, pointing at the offending line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected '# date DDMMYY' header, found '{content}'")]
    ExpectedDateHeader { line: usize, content: String },

    #[error("line {line}: unparsable date '{token}'")]
    InvalidDate { line: usize, token: String },

    #[error("line {line}: expected the 'timesheet' keyword after the date header, found '{content}'")]
    ExpectedTimesheet { line: usize, content: String },

    #[error("line {line}: project '{content}' appears outside a timesheet block")]
    ProjectOutsideBlock { line: usize, content: String },

    #[error("line {line}: '{content}' has no project above it")]
    MissingProject { line: usize, content: String },

    #[error("line {line}: time entry '{content}' is indented under a task but no task line precedes it")]
    MissingTask { line: usize, content: String },

    #[error("line {line}: expected 'HH.MM - HH.MM <description>', found '{content}'")]
    InvalidTimeRange { line: usize, content: String },

    #[error("line {line}: invalid time '{token}' (expected HH.MM with hours 0-23 and minutes 0-59)")]
    InvalidTime { line: usize, token: String },

    #[error("line {line}: end time {end} is not after start time {start}")]
    EndBeforeStart { line: usize, start: NaiveTime, end: NaiveTime },
}

/// Parser context: the date/project/task the next time line will attach to.
#[derive(Debug, Default)]
struct Context {
    date: Option<NaiveDate>,
    project: Option<String>,
    task: Option<String>,
    in_block: bool,
    expect_keyword: bool,
}

/// Parses a whole timesheet text into ordered time entries.
///
/// Blank lines are skipped anywhere. The first error aborts the parse; no
/// partial entry list is returned.
pub fn parse(input: &str) -> Result<Vec<TimeEntry>, ParseError> {
    let mut entries = Vec::new();
    let mut ctx = Context::default();

    for (index, raw_line) in input.lines().enumerate() {
        let line = index + 1;
        let content = raw_line.trim();
        if content.is_empty() {
            continue;
        }
        let depth = indent_depth(raw_line);

        // Rule: the keyword must be the next significant line after a date header.
        if ctx.expect_keyword && !(depth == KEYWORD_DEPTH && content.eq_ignore_ascii_case(TIMESHEET_KEYWORD)) {
            return Err(ParseError::ExpectedTimesheet {
                line,
                content: content.to_string(),
            });
        }

        match depth {
            DATE_DEPTH => {
                ctx = Context {
                    date: Some(parse_date_header(line, content)?),
                    expect_keyword: true,
                    ..Context::default()
                };
            }
            KEYWORD_DEPTH => {
                if !content.eq_ignore_ascii_case(TIMESHEET_KEYWORD) {
                    return Err(ParseError::ExpectedTimesheet {
                        line,
                        content: content.to_string(),
                    });
                }
                if ctx.date.is_none() {
                    return Err(ParseError::ExpectedDateHeader {
                        line,
                        content: content.to_string(),
                    });
                }
                ctx.in_block = true;
                ctx.expect_keyword = false;
                ctx.project = None;
                ctx.task = None;
            }
            PROJECT_DEPTH => {
                if !ctx.in_block {
                    return Err(ParseError::ProjectOutsideBlock {
                        line,
                        content: content.to_string(),
                    });
                }
                ctx.project = Some(content.to_string());
                ctx.task = None;
            }
            TASK_DEPTH => {
                let (Some(date), Some(project)) = (ctx.date, ctx.project.clone()) else {
                    return Err(ParseError::MissingProject {
                        line,
                        content: content.to_string(),
                    });
                };
                if looks_like_time_line(content) {
                    let (start, end, description) = parse_time_range(line, content)?;
                    entries.push(TimeEntry {
                        date,
                        project,
                        task: String::new(),
                        start,
                        end,
                        description,
                    });
                    ctx.task = None;
                } else {
                    ctx.task = Some(content.to_string());
                }
            }
            _ => {
                let (Some(date), Some(project)) = (ctx.date, ctx.project.clone()) else {
                    return Err(ParseError::MissingProject {
                        line,
                        content: content.to_string(),
                    });
                };
                let Some(task) = ctx.task.clone() else {
                    return Err(ParseError::MissingTask {
                        line,
                        content: content.to_string(),
                    });
                };
                let (start, end, description) = parse_time_range(line, content)?;
                entries.push(TimeEntry {
                    date,
                    project,
                    task,
                    start,
                    end,
                    description,
                });
            }
        }
    }

    Ok(entries)
}

/// Measures the nesting depth of a line: leading spaces divided by
/// [`INDENT_WIDTH`], a tab counting as one full level.
fn indent_depth(line: &str) -> usize {
    let mut spaces = 0;
    for c in line.chars() {
        match c {
            ' ' => spaces += 1,
            '\t' => spaces += INDENT_WIDTH,
            _ => break,
        }
    }
    spaces / INDENT_WIDTH
}

/// Parses a `# date DDMMYY` header line and returns the date.
fn parse_date_header(line: usize, content: &str) -> Result<NaiveDate, ParseError> {
    let mut parts = content.split_whitespace();
    let header = (parts.next(), parts.next(), parts.next(), parts.next());
    let (Some("#"), Some("date"), Some(token), None) = header else {
        return Err(ParseError::ExpectedDateHeader {
            line,
            content: content.to_string(),
        });
    };
    parse_date(token).ok_or_else(|| ParseError::InvalidDate {
        line,
        token: token.to_string(),
    })
}

/// True when the first token of a line reads as a `HH.MM` time, possibly
/// glued to a range dash. Such lines must then parse as full time ranges.
fn looks_like_time_line(content: &str) -> bool {
    let first = content.split_whitespace().next().unwrap_or("");
    is_time_token(first.split('-').next().unwrap_or(first))
}

fn is_time_token(token: &str) -> bool {
    match token.split_once('.') {
        Some((hours, minutes)) => {
            (1..=2).contains(&hours.len())
                && (1..=2).contains(&minutes.len())
                && hours.chars().all(|c| c.is_ascii_digit())
                && minutes.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Parses `HH.MM - HH.MM <description>` into times and description text.
/// The description may be empty; the dash may be glued to either time.
fn parse_time_range(line: usize, content: &str) -> Result<(NaiveTime, NaiveTime, String), ParseError> {
    let Some((lhs, rhs)) = content.split_once('-') else {
        return Err(ParseError::InvalidTimeRange {
            line,
            content: content.to_string(),
        });
    };

    let start_token = lhs.trim();
    let start = parse_time(start_token).ok_or_else(|| ParseError::InvalidTime {
        line,
        token: start_token.to_string(),
    })?;

    let rhs = rhs.trim_start();
    let (end_token, description) = match rhs.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (rhs.trim_end(), ""),
    };
    let end = parse_time(end_token).ok_or_else(|| ParseError::InvalidTime {
        line,
        token: end_token.to_string(),
    })?;

    if end <= start {
        return Err(ParseError::EndBeforeStart { line, start, end });
    }

    Ok((start, end, description.to_string()))
}
