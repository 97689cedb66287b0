//! Error types for civil date handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date construction or parsing.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day does not name a Gregorian calendar day.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour or minute outside the 24-hour clock.
    InvalidTime { hour: u32, minute: u32 },
    /// Text could not be parsed as a date or timestamp.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidTime { hour, minute } => {
                write!(f, "invalid time: {hour:02}:{minute:02}")
            }
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::num::ParseIntError> for TimeError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
