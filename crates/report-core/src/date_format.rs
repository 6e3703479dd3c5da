//! Display formatting for dates coming from the reports API
//!
//! The API is inconsistent about dates: some rows carry ISO timestamps, some
//! carry dates that were already formatted upstream, and some carry nothing.
//! `format_date` accepts all of them and always returns something printable.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;

use crate::constants;
use crate::error::FormatError;
use crate::periods::MonthYearOption;

/// `D/M/YYYY` with one or two digit day and month
static CANONICAL_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}$").expect("canonical date pattern compiles"));

/// Anything a table cell might want to show as a date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Absent,
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput<'_> {
    /// Missing value or empty string
    pub fn is_absent(&self) -> bool {
        matches!(self, DateInput::Absent | DateInput::Text(""))
    }

    /// Coerce to a calendar date, parsing text if needed
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Absent => None,
            DateInput::Text(text) => parse_date_text(text.trim()),
            DateInput::Date(date) => Some(*date),
            DateInput::DateTime(datetime) => Some(datetime.date()),
        }
    }
}

impl fmt::Display for DateInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Absent => Ok(()),
            DateInput::Text(text) => f.write_str(text),
            DateInput::Date(date) => write!(f, "{}", date),
            DateInput::DateTime(datetime) => write!(f, "{}", datetime),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(datetime: NaiveDateTime) -> Self {
        DateInput::DateTime(datetime)
    }
}

/// Offset-aware values keep the wall-clock date of their own offset
impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(datetime: DateTime<Tz>) -> Self {
        DateInput::DateTime(datetime.naive_local())
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Absent, Into::into)
    }
}

/// One step of the formatting cascade.
///
/// `apply` returns `Ok(None)` when the strategy does not recognise the input,
/// letting the next one try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStrategy {
    /// Nothing to show
    Absent,
    /// Already `D/M/YYYY`, shown untouched
    Canonical,
    /// Parses as a date or date-time
    Parsed,
    /// Unparseable but hyphenated like `YYYY-MM-DD...`
    IsoSegments,
    /// Whatever the input looks like as text
    Raw,
}

impl FormatStrategy {
    /// Evaluation order used by [`format_date`]
    pub const ORDER: [FormatStrategy; 5] = [
        FormatStrategy::Absent,
        FormatStrategy::Canonical,
        FormatStrategy::Parsed,
        FormatStrategy::IsoSegments,
        FormatStrategy::Raw,
    ];

    pub fn apply(self, input: &DateInput<'_>) -> Result<Option<String>, FormatError> {
        match self {
            FormatStrategy::Absent => Ok(input.is_absent().then(String::new)),
            FormatStrategy::Canonical => Ok(match input {
                DateInput::Text(text) if CANONICAL_DATE.is_match(text) => Some((*text).to_string()),
                _ => None,
            }),
            FormatStrategy::Parsed => Ok(input
                .to_naive_date()
                .map(|date| date.format(constants::DISPLAY_DATE_FORMAT).to_string())),
            FormatStrategy::IsoSegments => match input {
                DateInput::Text(text) if text.contains('-') => from_iso_segments(text),
                _ => Ok(None),
            },
            FormatStrategy::Raw => Ok(Some(input.to_string())),
        }
    }
}

/// Format any date-like value as `DD/MM/YYYY` for display.
///
/// Never fails: absent input gives `""`, and input that cannot be read as a
/// date is returned as-is.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    let input = input.into();

    for strategy in FormatStrategy::ORDER {
        match strategy.apply(&input) {
            Ok(Some(formatted)) => return formatted,
            Ok(None) => continue,
            Err(err) => {
                log::warn!("Date formatting failed in {:?} step, showing raw value: {}", strategy, err);
                return input.to_string();
            }
        }
    }

    input.to_string()
}

/// Format a period as `MM/YYYY`
pub fn format_month_year(period: &MonthYearOption) -> String {
    format!("{:02}/{}", period.month() + 1, period.year())
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Some(datetime.date_naive());
    }

    constants::DATETIME_PARSE_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            constants::DATE_PARSE_FORMATS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
        })
}

/// Rebuild `DD/MM/YYYY` from `YYYY-MM-DD[THH:MM:SS]` without validating ranges
fn from_iso_segments(text: &str) -> Result<Option<String>, FormatError> {
    let segments: Vec<&str> = text.split('-').collect();
    if segments.len() < 3 {
        return Err(FormatError::MissingSegments {
            input: text.to_string(),
            found: segments.len(),
        });
    }

    let year = segments[0];
    let month = segments[1];
    // Drop any time of day glued onto the day
    let day = segments[2].split(['T', ' ']).next().unwrap_or_default();

    let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !(is_number(year) && is_number(month) && is_number(day)) {
        return Ok(None);
    }

    Ok(Some(format!("{:0>2}/{:0>2}/{}", day, month, year)))
}
