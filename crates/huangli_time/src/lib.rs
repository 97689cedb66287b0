//! Civil calendar arithmetic for the huangli almanac.
//!
//! This crate provides:
//! - Julian Day Number ↔ Gregorian calendar conversions
//! - `CivilDate` / `CivilDateTime` value types with validation and parsing
//! - Monday-first `Weekday` with Chinese names
//!
//! All arithmetic is integer-only; no time zones are involved.

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{ALL_WEEKDAYS, CivilDate, CivilDateTime, Weekday, minutes_between};
pub use error::TimeError;
pub use julian::{
    MINUTES_PER_DAY, UNIX_EPOCH_JDN, calendar_to_jdn, days_in_month, is_leap_year,
    jdn_to_calendar,
};
