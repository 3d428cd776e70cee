//! Date formatting and relative time.
//!
//! Dates render in UTC. Date-only strings (`2024-01-05`) are read as UTC
//! midnight.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InsightsError;
use crate::Result;

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

/// Output style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `Jan 5, 2024`
    #[default]
    Short,
    /// `Friday, January 5, 2024`
    Long,
    /// `3d ago`
    Relative,
    /// `2024-01-05`
    Iso,
}

impl FromStr for DateFormat {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "short" => Ok(DateFormat::Short),
            "long" => Ok(DateFormat::Long),
            "relative" => Ok(DateFormat::Relative),
            "iso" => Ok(DateFormat::Iso),
            _ => Err(InsightsError::UnknownDateFormat(s.to_string())),
        }
    }
}

/// Something [`format_date`] can read: an instant or a date string.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    Instant(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for DateInput<'_> {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Instant(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)))
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text)
    }
}

impl DateInput<'_> {
    fn resolve(self) -> Result<DateTime<Utc>> {
        match self {
            DateInput::Instant(instant) => Ok(instant),
            DateInput::Text(text) => parse_date(text),
        }
    }
}

/// Parse RFC 3339 (`2024-01-05T10:30:00Z`), a bare date (`2024-01-05`) or a
/// zone-less date-time (`2024-01-05T10:30:00`, optionally with a space
/// instead of `T`).
pub fn parse_date(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN)));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| InsightsError::InvalidDate(text.to_string()))
}

/// Format a date relative to the current time.
///
/// Unparseable strings are an error rather than an "Invalid Date" string.
pub fn format_date<'a>(date: impl Into<DateInput<'a>>, format: DateFormat) -> Result<String> {
    format_date_at(date, format, Utc::now())
}

/// [`format_date`] with an explicit "now" for relative output.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use insightslib::format::{format_date_at, DateFormat};
///
/// let now = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
/// assert_eq!(format_date_at("2024-01-05", DateFormat::Short, now).unwrap(), "Jan 5, 2024");
/// assert_eq!(format_date_at("2024-01-05", DateFormat::Relative, now).unwrap(), "3d ago");
/// ```
pub fn format_date_at<'a>(
    date: impl Into<DateInput<'a>>,
    format: DateFormat,
    now: DateTime<Utc>,
) -> Result<String> {
    let instant = date.into().resolve()?;
    Ok(match format {
        DateFormat::Short => instant.format("%b %-d, %Y").to_string(),
        DateFormat::Long => instant.format("%A, %B %-d, %Y").to_string(),
        DateFormat::Relative => relative_time(instant, now),
        DateFormat::Iso => instant.format("%Y-%m-%d").to_string(),
    })
}

/// Bucket the time since `date` into a short label (`Just now`, `5m ago`,
/// `2h ago`, `3d ago`, `4mo ago`, `1y ago`). Months are 30 days, years 365.
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - date).num_seconds();
    if elapsed < MINUTE {
        "Just now".to_string()
    } else if elapsed < HOUR {
        format!("{}m ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{}h ago", elapsed / HOUR)
    } else if elapsed < MONTH {
        format!("{}d ago", elapsed / DAY)
    } else if elapsed < YEAR {
        format!("{}mo ago", elapsed / MONTH)
    } else {
        format!("{}y ago", elapsed / YEAR)
    }
}
