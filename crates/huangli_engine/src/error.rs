//! Error type of the almanac engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use huangli_base::BaseError;
use huangli_time::TimeError;

/// Errors from computing an almanac day.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    /// Table lookup failed (out-of-range year or malformed table).
    Base(BaseError),
    /// Civil date/time handling failed.
    Time(TimeError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EngineError {}

impl From<BaseError> for EngineError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
