//! Calendar foundations of the huangli almanac.
//!
//! This crate provides:
//! - Packed solar-term decoding and the per-year calendar tables (1901–2100)
//! - Gregorian → Chinese lunar date resolution with leap months
//! - Solar term resolution (today's term and the next one, across years)
//! - Year/month/day/hour sexagenary pillars with the 立春 year switch
//! - Day officers, yellow/black-path gods and lucky hours
//! - Derived attributes: nayin, lodges, flying stars, directions, taboos
//! - Civil and lunar holidays
//!
//! Everything is a pure function of the request and the static tables.

pub mod attributes;
pub mod error;
pub mod holiday;
pub mod lodge;
pub mod lunar;
pub mod officer;
pub mod packed;
pub mod pillars;
pub mod sexagenary;
pub mod solar_term;
pub mod tables;

pub use attributes::{
    DerivedAttributes, MoonPhase, Season, ZodiacRelations, derive_attributes, east_zodiac,
    lucky_directions, nayin, peng_taboo, star_sign,
};
pub use error::BaseError;
pub use holiday::{Holidays, holidays, nth_sunday};
pub use lodge::{LODGE_EPOCH, lodge, lodge_index, nine_flying_stars};
pub use lunar::{
    LUNAR_MONTH_LAST_YEAR, LunarDate, LunarResolution, LunarYearLayout, NEW_YEAR_LAST_YEAR,
    lunar_new_year, resolve_lunar_date,
};
pub use officer::{
    ALL_DAY_OFFICERS, ALL_PATH_GODS, DayOfficer, DayOfficerInfo, OfficerMode, PathGod,
    day_officer, lucky_hours, officer_month_index,
};
pub use packed::{
    SOLAR_TERM_LAST_YEAR, TERM_FIELD_BITS, TERMS_PER_YEAR, decode_solar_terms,
    decode_solar_terms_str, unpack_fields, year_solar_term_days,
};
pub use pillars::{
    DAY_PILLAR_EPOCH, LATE_NIGHT_BLOCK, Pillars, YearPillarMode, compute_pillars, day_pillar,
    hour_pillars, month_pillar, spring_adjustment, two_hour_block, year_pillar,
};
pub use sexagenary::{ALL_BRANCHES, ALL_STEMS, Branch, CYCLE_LEN, Element, Pillar, Stem};
pub use solar_term::{
    ALL_SOLAR_TERMS, SEASON_MIDPOINTS, SEASON_STARTS, SolarTerm, SolarTermInfo, SolarTermTable,
    resolve_solar_terms,
};
