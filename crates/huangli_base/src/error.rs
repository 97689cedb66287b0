//! Error types for calendar table lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

use huangli_time::TimeError;

/// Errors from lunar/solar-term/pillar calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Requested year lies outside the span of a backing table.
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// A static table entry could not be decoded.
    MalformedTable(&'static str),
    /// Error from civil date handling.
    Time(TimeError),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange { year, min, max } => {
                write!(f, "year {year} out of supported range {min}..={max}")
            }
            Self::MalformedTable(what) => write!(f, "malformed table: {what}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for BaseError {}

impl From<TimeError> for BaseError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
