//! Declarative rule entries of the deity and demon tables.
//!
//! A [`Rule`] names a deity or demon, a [`Matcher`] deciding whether it is
//! present on the request day, and the activities it favors and disfavors.
//! Matchers compare [`Text`] operands that are resolved against a
//! [`RuleContext`]: a selector like `Text::Month("...")` picks the character
//! at the month index, so a whole row of a printed almanac table fits in one
//! string.

use std::ops::RangeInclusive;

use huangli_base::SolarTerm;

use crate::context::RuleContext;

/// Pillars without a "no general" (不将) clash, indexed by month index.
pub const BU_JIANG: [&str; 12] = [
    "丙寅丙辰丁卯丁巳己卯己巳庚寅庚辰辛卯辛巳",
    "乙丑乙卯丙寅丙辰戊寅戊辰己丑己卯庚寅庚辰",
    "丙子丙寅丁丑丁卯己丑己卯庚子庚寅辛丑辛卯",
    "乙亥乙丑丙子丙寅戊子戊寅己亥己丑庚子庚寅",
    "甲戌甲子乙亥乙丑丁亥丁丑戊戌戊子己亥己丑",
    "癸酉癸亥甲戌甲子丙戌丙子丁酉丁亥戊戌戊子",
    "壬申壬戌癸酉癸亥乙酉乙亥丙申丙戌丁酉丁亥",
    "辛未辛酉壬申壬戌甲申甲戌乙未乙酉丙申丙戌",
    "庚午庚申辛未辛酉癸未癸酉甲午甲申乙未乙酉",
    "己巳己未庚午庚申壬午壬申癸巳癸未甲午甲申",
    "戊辰戊午己巳己未辛巳辛未壬辰壬午癸巳癸未",
    "丁卯丁巳戊辰戊午庚辰庚午辛卯辛巳壬辰壬午",
];

/// A string operand of a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    /// Day pillar name, e.g. `癸卯`.
    DayPillar,
    /// Day stem character.
    DayStem,
    /// Day branch character.
    DayBranch,
    /// First character of the lodge name.
    LodgeChar,
    /// A fixed string.
    Literal(&'static str),
    /// Character at the month index.
    Month(&'static str),
    /// Character at the month index modulo 6.
    Month6(&'static str),
    /// Character at the year stem index.
    YearStem(&'static str),
    /// Character at the year branch index modulo 4.
    YearBranch4(&'static str),
    /// Two-character slice at the month index.
    MonthPillar(&'static str),
    /// Two-character slice at the season index.
    SeasonPillar(&'static str),
    /// Entry at the month index.
    MonthList(&'static [&'static str; 12]),
    /// Entry at the season index.
    Season(&'static [&'static str; 4]),
}

/// The `n` characters of `s` starting at character `i`, or `""` when out of range.
fn char_slice(s: &'static str, i: usize, n: usize) -> &'static str {
    let mut bounds = s.char_indices().map(|(b, _)| b).chain(std::iter::once(s.len()));
    let Some(start) = bounds.nth(i) else {
        return "";
    };
    match bounds.nth(n - 1) {
        Some(end) => &s[start..end],
        None => "",
    }
}

impl Text {
    /// Resolve against the request context. Out-of-range selections yield `""`.
    pub fn resolve(&self, ctx: &RuleContext) -> &'static str {
        let day = ctx.day.name();
        let month = ctx.month_index as usize;
        let season = ctx.season as usize;
        match *self {
            Self::DayPillar => day,
            Self::DayStem => char_slice(day, 0, 1),
            Self::DayBranch => char_slice(day, 1, 1),
            Self::LodgeChar => char_slice(ctx.lodge, 0, 1),
            Self::Literal(s) => s,
            Self::Month(s) => char_slice(s, month, 1),
            Self::Month6(s) => char_slice(s, month % 6, 1),
            Self::YearStem(s) => char_slice(s, ctx.year.stem().index() as usize, 1),
            Self::YearBranch4(s) => char_slice(s, ctx.year.branch().index() as usize % 4, 1),
            Self::MonthPillar(s) => char_slice(s, month * 2, 2),
            Self::SeasonPillar(s) => char_slice(s, season * 2, 2),
            Self::MonthList(list) => list.get(month).copied().unwrap_or(""),
            Self::Season(list) => list.get(season).copied().unwrap_or(""),
        }
    }
}

/// Computed conditions that do not fit a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Day branch and month index differ by a multiple of four (三合).
    SanHe,
    /// Day pillar index in `0..5`, `15..20` or `45..50` (天恩).
    TianEn,
    /// Day branch clashes with the year branch (岁破).
    SuiPo,
}

impl Condition {
    /// Whether the condition holds on the request day.
    pub fn holds(self, ctx: &RuleContext) -> bool {
        let day_branch = ctx.day.branch().index() as i64;
        match self {
            Self::SanHe => (day_branch - ctx.month_index as i64).rem_euclid(4) == 0,
            Self::TianEn => {
                let d = ctx.day.index();
                d % 15 < 5 && d / 15 != 2
            }
            Self::SuiPo => day_branch == (ctx.year.branch().index() as i64 + 6) % 12,
        }
    }
}

/// How a rule decides whether it is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// A computed condition.
    Flag(Condition),
    /// `needle` occurs in `haystack`. An empty needle never matches.
    Contains { needle: Text, haystack: Text },
    /// `value` equals one of `set`.
    OneOf {
        value: Text,
        set: &'static [&'static str],
    },
    /// Lunar day is one of the listed days.
    LunarDayIn(&'static [u32]),
    /// `(lunar month, lunar day)` is one of the listed pairs.
    LunarDateIn(&'static [(u32, u32)]),
    /// `(lunar month, day pillar)` is one of the listed pairs.
    MonthPillarIn(&'static [(u32, &'static str)]),
    /// Tomorrow's civil `(month, day)` is the date of one of the terms this year.
    TomorrowIsTerm([SolarTerm; 4]),
    /// Whole days until the next season-start term fall in the range.
    CountdownIn(RangeInclusive<i64>),
}

impl Matcher {
    /// Whether the rule is present on the request day.
    pub fn matches(&self, ctx: &RuleContext) -> bool {
        match self {
            Self::Flag(cond) => cond.holds(ctx),
            Self::Contains { needle, haystack } => {
                let needle = needle.resolve(ctx);
                !needle.is_empty() && haystack.resolve(ctx).contains(needle)
            }
            Self::OneOf { value, set } => set.contains(&value.resolve(ctx)),
            Self::LunarDayIn(days) => days.contains(&ctx.lunar_day),
            Self::LunarDateIn(dates) => dates.contains(&(ctx.lunar_month, ctx.lunar_day)),
            Self::MonthPillarIn(pairs) => pairs
                .iter()
                .any(|&(m, p)| m == ctx.lunar_month && p == ctx.day.name()),
            Self::TomorrowIsTerm(terms) => terms
                .iter()
                .any(|&t| ctx.terms.month_day(t) == ctx.tomorrow),
            Self::CountdownIn(range) => range.contains(&ctx.countdown_days),
        }
    }
}

/// One named deity or demon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Name reported when the rule matches.
    pub name: &'static str,
    /// Presence test.
    pub matcher: Matcher,
    /// Activities favored when present.
    pub good: &'static [&'static str],
    /// Activities disfavored when present.
    pub bad: &'static [&'static str],
}

impl Rule {
    /// Whether the rule is present on the request day.
    pub fn matches(&self, ctx: &RuleContext) -> bool {
        self.matcher.matches(ctx)
    }
}
