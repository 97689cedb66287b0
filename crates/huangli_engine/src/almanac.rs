//! The full almanac pipeline of one request.

use huangli_base::{
    DerivedAttributes, Holidays, LunarDate, Pillars, SolarTermInfo, compute_pillars,
    derive_attributes, holidays, resolve_lunar_date, resolve_solar_terms,
};
use huangli_time::CivilDateTime;
use tracing::{debug, instrument, warn};

use crate::activity::ActivityList;
use crate::config::AlmanacConfig;
use crate::context::RuleContext;
use crate::error::EngineError;
use crate::filter::finalize;
use crate::level::{Disposition, day_level, has_virtue, level_name};
use crate::matching::collect;

/// Result of the deity/demon rule engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    /// Matched auspicious deities, in table order.
    pub good_gods: Vec<&'static str>,
    /// Matched inauspicious demons, in table order.
    pub bad_gods: Vec<&'static str>,
    /// Day-quality level, `-1` when none applies.
    pub level: i8,
    pub level_name: &'static str,
    pub disposition: Disposition,
    pub disposition_name: &'static str,
    /// Whether a virtue deity (德) matched.
    pub has_virtue: bool,
    /// Favorable activities (宜), canonically sorted.
    pub good_things: ActivityList,
    /// Unfavorable activities (忌), canonically sorted.
    pub bad_things: ActivityList,
}

/// Everything the almanac says about one date and time.
#[derive(Debug, Clone, PartialEq)]
pub struct AlmanacDay {
    /// The request.
    pub time: CivilDateTime,
    /// Options the day was computed with.
    pub config: AlmanacConfig,
    pub lunar: LunarDate,
    /// Signed days from this civil year's lunar new year.
    pub span_days: i64,
    pub terms: SolarTermInfo,
    pub pillars: Pillars,
    pub attributes: DerivedAttributes,
    pub holidays: Holidays,
    pub outcome: DayOutcome,
}

impl AlmanacDay {
    /// Chinese lunar date: year digits, month name and day name.
    pub fn lunar_text(&self) -> String {
        format!(
            "{}年 {} {}",
            self.lunar.year_cn(),
            self.lunar.month_cn(),
            self.lunar.day_cn()
        )
    }

    /// The four pillars joined with spaces.
    pub fn pillars_text(&self) -> String {
        let p = &self.pillars;
        format!(
            "{} {} {} {}",
            p.year.name(),
            p.month.name(),
            p.day.name(),
            p.hour.name()
        )
    }
}

/// Run the rule engine on a prepared context.
pub fn evaluate(ctx: &RuleContext) -> DayOutcome {
    let tally = collect(ctx);
    let officer_day = format!("{}日", ctx.officer.name());
    let mut names: Vec<&str> = tally
        .good_names
        .iter()
        .chain(&tally.bad_names)
        .copied()
        .collect();
    names.push(&officer_day);

    let level = day_level(&names, ctx.month.branch().name());
    let virtue = has_virtue(&tally.good_names);
    let disposition = Disposition::from_level(level, virtue);
    debug!(level, disposition = disposition.code(), virtue, "day level");

    let lists = finalize(ctx, &tally, level, disposition, virtue);
    DayOutcome {
        level_name: level_name(level),
        disposition_name: disposition.name(),
        level,
        disposition,
        has_virtue: virtue,
        good_things: lists.good,
        bad_things: lists.bad,
        good_gods: tally.good_names,
        bad_gods: tally.bad_names,
    }
}

/// Compute the almanac of `time`.
///
/// Stages run in a fixed order: lunar date, solar terms, pillars, derived
/// attributes, holidays, then the rule engine. Fails only when the date
/// lies outside the supported tables.
#[instrument(skip_all, fields(time = %time))]
pub fn compute(time: &CivilDateTime, config: &AlmanacConfig) -> Result<AlmanacDay, EngineError> {
    let date = time.date();
    let resolution = resolve_lunar_date(&date).inspect_err(|e| warn!(%e, "lunar lookup rejected"))?;
    let lunar = resolution.date;
    let terms = resolve_solar_terms(&date).inspect_err(|e| warn!(%e, "solar term lookup rejected"))?;
    debug!(
        lunar_year = lunar.year,
        lunar_month = lunar.month,
        lunar_day = lunar.day,
        next_term = terms.next.name(),
        "calendar resolved"
    );

    let pillars = compute_pillars(
        time,
        lunar.year,
        resolution.span_days,
        terms.next_index,
        config.year_pillar,
    );
    let attributes = derive_attributes(time, &lunar, &pillars, &terms, config.officer_mode);
    let holidays = holidays(&date, &lunar, terms.today);

    let ctx = RuleContext::new(time, &lunar, &pillars, &terms, &attributes);
    let outcome = evaluate(&ctx);

    Ok(AlmanacDay {
        time: *time,
        config: *config,
        lunar,
        span_days: resolution.span_days,
        terms,
        pillars,
        attributes,
        holidays,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_fills_every_part() {
        let time = CivilDateTime::new(2024, 2, 10, 12, 0).unwrap();
        let day = compute(&time, &AlmanacConfig::default()).unwrap();
        assert_eq!(day.pillars_text(), "甲辰 丙寅 甲辰 庚午");
        assert_eq!(day.holidays.legal_text(), "春节");
        assert!(!day.outcome.good_things.is_empty());
        assert!(!day.outcome.bad_things.is_empty());
    }

    #[test]
    fn out_of_range_is_an_error() {
        let time = CivilDateTime::new(1899, 6, 1, 0, 0).unwrap();
        assert!(matches!(
            compute(&time, &AlmanacConfig::default()),
            Err(EngineError::Base(_))
        ));
    }
}
