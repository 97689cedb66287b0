//! Derived almanac attributes: pure lookups keyed by the pillars, the lunar
//! date and the solar-term state of a request.

use huangli_time::{CivilDateTime, Weekday};

use crate::lodge::{lodge, nine_flying_stars};
use crate::lunar::LunarDate;
use crate::officer::{DayOfficerInfo, OfficerMode, day_officer, lucky_hours, officer_month_index};
use crate::pillars::Pillars;
use crate::sexagenary::{Branch, Pillar};
use crate::solar_term::SolarTermInfo;
use crate::tables::almanac_data::{
    DIRECTIONS, EAST_ZODIAC, FETAL_GODS, LUCKY_GOD_TRIGRAMS, MERIDIANS, NAYIN, PENG_TABOOS,
    STAR_SIGN_STARTS, STAR_SIGNS, TRIGRAMS,
};

/// Principal phases of the moon, read off the lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// 朔, the first day.
    New,
    /// 上弦, days 7 and 8.
    FirstQuarter,
    /// 望, day 15 (day 16 in a big month).
    Full,
    /// 下弦, days 22 and 23.
    LastQuarter,
}

impl MoonPhase {
    /// Chinese name, e.g. `望`.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "朔",
            Self::FirstQuarter => "上弦",
            Self::Full => "望",
            Self::LastQuarter => "下弦",
        }
    }

    /// Phase of `lunar`, if it falls on one.
    pub fn of(lunar: &LunarDate) -> Option<Self> {
        let big = if lunar.is_big_month() { 1 } else { 0 };
        match lunar.day {
            d if d == 15 + big => Some(Self::Full),
            1 => Some(Self::New),
            7..=8 => Some(Self::FirstQuarter),
            22..=23 => Some(Self::LastQuarter),
            _ => None,
        }
    }
}

/// Season of the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Season {
    /// 0 = spring .. 3 = winter.
    pub index: u8,
    /// 0 = 仲 (middle), 1 = 季 (last), 2 = 孟 (first).
    pub kind: u8,
}

impl Season {
    /// Season of a month with branch `month_branch` (寅 month = 孟春).
    pub fn of(month_branch: Branch) -> Self {
        let b = month_branch.index() as i64;
        Self {
            index: ((b - 2).rem_euclid(12) / 3) as u8,
            kind: (b % 3) as u8,
        }
    }

    /// Two-character name, e.g. `孟春`.
    pub fn name(&self) -> String {
        let kind = ["仲", "季", "孟"][self.kind as usize % 3];
        let season = ["春", "夏", "秋", "冬"][self.index as usize % 4];
        format!("{kind}{season}")
    }
}

/// Zodiac relations of the day branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZodiacRelations {
    /// Animal of the day branch.
    pub win: &'static str,
    /// Animal clashed by the day (six branches away).
    pub lose: &'static str,
    /// Six-harmony (六合) animal.
    pub six_harmony: &'static str,
    /// Three-harmony (三合) animals.
    pub three_harmony: [&'static str; 2],
}

impl ZodiacRelations {
    /// Relations of a day with branch `day`.
    pub fn of(day: Branch) -> Self {
        let z = day.index() as i64;
        let animal = |i: i64| Branch::from_index(i).animal();
        Self {
            win: animal(z),
            lose: animal(z + 6),
            six_harmony: animal(25 - z),
            three_harmony: [animal(z + 4), animal(z + 8)],
        }
    }

    /// Clash text, e.g. `兔日冲鸡`.
    pub fn clash(&self) -> String {
        format!("{}日冲{}", self.win, self.lose)
    }
}

/// Every derived attribute of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedAttributes {
    /// Animal of the year pillar.
    pub zodiac: &'static str,
    /// Zodiac relations of the day branch.
    pub relations: ZodiacRelations,
    /// Civil weekday.
    pub weekday: Weekday,
    /// Lodge of the day, e.g. `角木蛟`.
    pub lodge: &'static str,
    /// Nine flying stars digits.
    pub flying_stars: String,
    /// Nayin of the day pillar.
    pub nayin: &'static str,
    /// Five-element tokens: stem, branch, nayin, lodge and officer.
    pub five_elements: Vec<String>,
    /// Peng Zu taboo text.
    pub peng_taboo: String,
    /// Lucky-god directions, e.g. `喜神东北`.
    pub lucky_directions: Vec<String>,
    /// Fetal god location.
    pub fetal_god: &'static str,
    /// Month index of the officer cycle.
    pub month_index: u8,
    /// Day officer and path god.
    pub officer: DayOfficerInfo,
    /// Auspicious flags of the thirteen two-hour blocks.
    pub lucky_hours: [bool; 13],
    /// Moon phase, if any.
    pub moon_phase: Option<MoonPhase>,
    /// Season of the month pillar.
    pub season: Season,
    /// Western star sign.
    pub star_sign: &'static str,
    /// Jupiter station (星次) of the current solar month.
    pub east_zodiac: &'static str,
    /// Meridian of the current two-hour block.
    pub meridian: &'static str,
}

impl DerivedAttributes {
    /// `吉`/`凶` marks of the thirteen two-hour blocks.
    pub fn lucky_hour_marks(&self) -> Vec<&'static str> {
        self.lucky_hours
            .iter()
            .map(|&good| if good { "吉" } else { "凶" })
            .collect()
    }
}

/// Nayin of `pillar`, e.g. `海中金`.
pub fn nayin(pillar: Pillar) -> &'static str {
    NAYIN[pillar.index() as usize / 2]
}

/// Peng Zu taboo text of `day`: stem clause, then branch clause.
pub fn peng_taboo(day: Pillar) -> String {
    let stem = PENG_TABOOS[day.stem().index() as usize];
    let branch = PENG_TABOOS[day.branch().index() as usize + 10];
    format!("{stem},{branch}")
}

/// Lucky-god directions of `day`, keyed by its stem.
pub fn lucky_directions(day: Pillar) -> Vec<String> {
    let stem = day.stem().index() as usize;
    LUCKY_GOD_TRIGRAMS
        .iter()
        .map(|(god, trigrams)| {
            let direction = trigrams
                .chars()
                .nth(stem)
                .and_then(|t| TRIGRAMS.iter().position(|&c| c == t))
                .map_or("", |i| DIRECTIONS[i]);
            format!("{god}{direction}")
        })
        .collect()
}

/// Western star sign of a civil `(month, day)`.
pub fn star_sign(month_day: (u32, u32)) -> &'static str {
    let passed = STAR_SIGN_STARTS.iter().filter(|&&start| start <= month_day).count();
    STAR_SIGNS[passed % 12]
}

/// Jupiter station for next-term index `next_index`.
pub fn east_zodiac(next_index: u8) -> &'static str {
    EAST_ZODIAC[((next_index as i64 - 1).rem_euclid(24) / 2) as usize]
}

fn five_elements(day: Pillar, nayin: &str, lodge: &str, officer: &str) -> Vec<String> {
    let nayin_element = nayin.chars().last().map(String::from).unwrap_or_default();
    let lodge_char = lodge.chars().next().map(String::from).unwrap_or_default();
    let stem = day.stem();
    let branch = day.branch();
    vec![
        "天干".to_string(),
        stem.name().to_string(),
        format!("属{}", stem.element().name()),
        "地支".to_string(),
        branch.name().to_string(),
        format!("属{}", branch.element().name()),
        "纳音".to_string(),
        nayin_element.clone(),
        format!("属{nayin_element}"),
        "廿八宿".to_string(),
        lodge_char,
        "宿".to_string(),
        "十二神".to_string(),
        officer.to_string(),
        "日".to_string(),
    ]
}

/// Compute every derived attribute of a request.
pub fn derive_attributes(
    time: &CivilDateTime,
    lunar: &LunarDate,
    pillars: &Pillars,
    terms: &SolarTermInfo,
    mode: OfficerMode,
) -> DerivedAttributes {
    let date = time.date();
    let month_index = officer_month_index(mode, pillars.month, lunar.month);
    let officer = day_officer(month_index, pillars.day.branch());
    let nayin = nayin(pillars.day);
    let lodge = lodge(&date);
    DerivedAttributes {
        zodiac: pillars.year.branch().animal(),
        relations: ZodiacRelations::of(pillars.day.branch()),
        weekday: date.weekday(),
        lodge,
        flying_stars: nine_flying_stars(&date),
        nayin,
        five_elements: five_elements(pillars.day, nayin, lodge, officer.officer.name()),
        peng_taboo: peng_taboo(pillars.day),
        lucky_directions: lucky_directions(pillars.day),
        fetal_god: FETAL_GODS[pillars.day.index() as usize],
        month_index,
        officer,
        lucky_hours: lucky_hours(pillars.day),
        moon_phase: MoonPhase::of(lunar),
        season: Season::of(pillars.month.branch()),
        star_sign: star_sign(date.month_day()),
        east_zodiac: east_zodiac(terms.next_index),
        meridian: MERIDIANS[(pillars.block % 12) as usize],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar(name: &str) -> Pillar {
        Pillar::from_name(name).unwrap()
    }

    #[test]
    fn nayin_pairs() {
        assert_eq!(nayin(pillar("甲子")), "海中金");
        assert_eq!(nayin(pillar("乙丑")), "海中金");
        assert_eq!(nayin(pillar("癸卯")), "金箔金");
        assert_eq!(nayin(pillar("癸亥")), "大海水");
    }

    #[test]
    fn peng_text() {
        assert_eq!(peng_taboo(pillar("癸卯")), "癸不词讼理弱敌强,卯不穿井水泉不香");
    }

    #[test]
    fn directions_of_jia_day() {
        let dirs = lucky_directions(pillar("甲子"));
        assert_eq!(dirs, vec!["喜神东北", "财神东北", "福神正北", "阳贵西南", "阴贵东北"]);
    }

    #[test]
    fn clash_and_harmony() {
        let rel = ZodiacRelations::of(Branch::Mao);
        assert_eq!(rel.clash(), "兔日冲鸡");
        assert_eq!(rel.six_harmony, "狗");
        assert_eq!(rel.three_harmony, ["羊", "猪"]);
    }

    #[test]
    fn seasons() {
        assert_eq!(Season::of(Branch::Yin).name(), "孟春");
        assert_eq!(Season::of(Branch::Mao).name(), "仲春");
        assert_eq!(Season::of(Branch::Chou).name(), "季冬");
        assert_eq!(Season::of(Branch::Chou).index, 3);
        assert_eq!(Season::of(Branch::Zi).index, 3);
    }

    #[test]
    fn moon_phases() {
        let mut d = LunarDate {
            year: 2024,
            month: 1,
            day: 15,
            is_leap_month: false,
            month_days: 29,
        };
        assert_eq!(MoonPhase::of(&d), Some(MoonPhase::Full));
        d.month_days = 30;
        assert_eq!(MoonPhase::of(&d), None);
        d.day = 16;
        assert_eq!(MoonPhase::of(&d), Some(MoonPhase::Full));
        d.day = 1;
        assert_eq!(MoonPhase::of(&d).map(MoonPhase::name), Some("朔"));
        d.day = 23;
        assert_eq!(MoonPhase::of(&d), Some(MoonPhase::LastQuarter));
    }

    #[test]
    fn star_signs() {
        assert_eq!(star_sign((1, 19)), "摩羯座");
        assert_eq!(star_sign((1, 20)), "水瓶座");
        assert_eq!(star_sign((12, 21)), "射手座");
        assert_eq!(star_sign((12, 22)), "摩羯座");
    }

    #[test]
    fn east_zodiac_by_next_term() {
        // Between 小寒 and 立春 the next index is 1 or 2.
        assert_eq!(east_zodiac(1), "玄枵");
        assert_eq!(east_zodiac(0), "星纪");
        assert_eq!(east_zodiac(3), "娵訾");
    }
}
