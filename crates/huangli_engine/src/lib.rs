//! Rule engine and entry point of the huangli almanac.
//!
//! [`compute`] resolves a civil date and time into an [`AlmanacDay`]: lunar
//! date, solar terms, pillars, derived attributes, holidays and the
//! [`DayOutcome`] of the deity/demon tables with the final 宜/忌 lists.
//!
//! ```rust,ignore
//! let time: CivilDateTime = "2024-02-10T12:00".parse()?;
//! let day = compute(&time, &AlmanacConfig::default())?;
//! println!("宜 {}", day.outcome.good_things.join(" "));
//! ```

pub mod activity;
pub mod almanac;
pub mod config;
pub mod context;
pub mod deity_table;
pub mod demon_table;
pub mod error;
pub mod filter;
pub mod level;
pub mod matching;
pub mod rules;

pub use activity::{
    ActivityList, NOTHING_SUITABLE, NOTHING_UNSUITABLE, THINGS_SORT, seed_activities, sort_rank,
};
pub use almanac::{AlmanacDay, DayOutcome, compute, evaluate};
pub use config::AlmanacConfig;
pub use context::{RuleContext, earth_king_countdown};
pub use deity_table::DEITIES;
pub use demon_table::DEMONS;
pub use error::EngineError;
pub use filter::{Finalized, finalize};
pub use level::{Disposition, LEVEL_TABLE, VIRTUE_NAMES, day_level, has_virtue, level_name};
pub use matching::{Tally, collect, virtue_avoids};
pub use rules::{BU_JIANG, Condition, Matcher, Rule, Text};

pub use huangli_base::{OfficerMode, YearPillarMode};
