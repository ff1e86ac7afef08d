//! Typed cell values produced by column accessors

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

/// Date formats tried when a text cell is read as a date
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The value of one cell, as returned by a column accessor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    List(Vec<String>),
    Date(NaiveDateTime),
}

impl CellValue {
    /// Whether the value counts as absent for option listings and filters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Bool(value) => !value,
            Self::Number(_) | Self::Date(_) => false,
        }
    }

    /// Read the value as a timestamp; text is parsed with the common formats.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(text) => parse_date(text),
            _ => None,
        }
    }

    /// Whether the value includes `needle`: membership for lists, substring for text.
    #[must_use]
    pub fn includes(&self, needle: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item == needle),
            Self::Text(text) => text.contains(needle),
            _ => false,
        }
    }

    /// Individual option values: list items are flattened, empty values yield nothing.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.iter().filter(|item| !item.is_empty()).cloned().collect(),
            value if value.is_empty() => Vec::new(),
            value => vec![value.to_string()],
        }
    }
}

fn parse_date(text: &str) -> Option<NaiveDateTime> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
        return Some(date_time.naive_utc());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(text, format) {
            return Some(date_time);
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(number) if number.is_finite() && number.fract() == 0.0 => {
                write!(f, "{}", *number as i64)
            }
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::List(items) => f.write_str(&items.join(", ")),
            Self::Date(date) => write!(f, "{}", date.format(DISPLAY_DATE_FORMAT)),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for CellValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
