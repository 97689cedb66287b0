//! Static reference tables.
//!
//! - [`calendar_data`]: lunar month layouts, lunar new-year anchors and packed solar terms
//! - [`almanac_data`]: naming tables keyed by pillar, stem, branch or cycle position
//! - [`holiday_data`]: civil and lunar festival dictionaries

pub mod almanac_data;
pub mod calendar_data;
pub mod holiday_data;
