//! Candidate activities: seeding, the term and lunar-day special rules, and
//! matching of the deity and demon tables.

use huangli_base::DayOfficer;
use tracing::debug;

use crate::activity::{ActivityList, seed_activities};
use crate::context::RuleContext;
use crate::deity_table::DEITIES;
use crate::demon_table::DEMONS;
use crate::rules::Rule;

/// Matched names and accumulated activities before finalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    /// Matched deity names, in table order.
    pub good_names: Vec<&'static str>,
    /// Matched demon names, in table order.
    pub bad_names: Vec<&'static str>,
    /// Favorable activities so far.
    pub good: ActivityList,
    /// Unfavorable activities so far.
    pub bad: ActivityList,
}

impl Tally {
    fn absorb(&mut self, rule: &Rule) {
        self.good.add(rule.good);
        self.bad.add(rule.bad);
    }
}

const HUNTING_OFFICERS: [DayOfficer; 3] = [DayOfficer::Zhi, DayOfficer::Wei, DayOfficer::Shou];

/// Whether the next term lies between 立冬 and 立春 (inclusive of the wrap at 小寒).
pub(crate) fn is_winter_felling(next_term_index: u8) -> bool {
    next_term_index >= 21 || next_term_index <= 2
}

fn apply_special_rules(ctx: &RuleContext, good: &mut ActivityList, bad: &mut ActivityList) {
    let ns = ctx.next_term_index;
    let hunting = HUNTING_OFFICERS.contains(&ctx.officer);
    if (4..=8).contains(&ns) && hunting {
        good.add(&["取鱼"]);
    }
    if (ns >= 20 || ns <= 2) && hunting {
        good.add(&["畋猎"]);
    }
    if is_winter_felling(ns) && ctx.officer == DayOfficer::Wei {
        good.add(&["伐木"]);
    }
    if [1, 6, 15, 19, 21, 23].contains(&ctx.lunar_day) {
        bad.add(&["整手足甲"]);
    }
    if [12, 15].contains(&ctx.lunar_day) {
        bad.add(&["整容", "剃头"]);
    }
    if ctx.lunar_day == 15 || ctx.has_moon_phase {
        bad.add(&["求医疗病"]);
    }
}

/// Seed the activity lists, apply the special rules, then match every
/// deity and every demon in declared order.
pub fn collect(ctx: &RuleContext) -> Tally {
    let (mut good, mut bad) = seed_activities(ctx.officer, ctx.day.name());
    apply_special_rules(ctx, &mut good, &mut bad);
    let mut tally = Tally {
        good,
        bad,
        ..Tally::default()
    };
    for rule in DEITIES {
        if rule.matches(ctx) {
            tally.good_names.push(rule.name);
            tally.absorb(rule);
        }
    }
    for rule in DEMONS {
        if rule.matches(ctx) {
            tally.bad_names.push(rule.name);
            tally.absorb(rule);
        }
    }
    debug!(
        deities = tally.good_names.len(),
        demons = tally.bad_names.len(),
        "rule tables matched"
    );
    tally
}

/// Activities still avoided under the matched virtue deities.
pub fn virtue_avoids(good_names: &[&str]) -> ActivityList {
    let mut out = ActivityList::default();
    for rule in DEITIES.iter().take(6) {
        if good_names.contains(&rule.name) {
            out.add(rule.bad);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn felling_window_wraps_the_year() {
        assert!(is_winter_felling(0));
        assert!(is_winter_felling(2));
        assert!(!is_winter_felling(3));
        assert!(!is_winter_felling(20));
        assert!(is_winter_felling(21));
        assert!(is_winter_felling(23));
    }

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<&str> = DEITIES.iter().chain(DEMONS).map(|r| r.name).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn virtue_avoids_follow_matched_virtues() {
        assert!(virtue_avoids(&["岁德", "天恩"]).is_empty());
        let avoids = virtue_avoids(&["月德", "天德合"]);
        assert!(avoids.contains("畋猎"));
        assert!(avoids.contains("取鱼"));
    }
}
