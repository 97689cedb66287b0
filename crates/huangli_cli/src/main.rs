mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use huangli_base::{
    ALL_BRANCHES, LunarResolution, OfficerMode, SolarTermTable, YearPillarMode,
    compute_pillars, resolve_lunar_date, resolve_solar_terms,
};
use huangli_engine::{AlmanacConfig, AlmanacDay, compute};
use huangli_time::{CivilDate, CivilDateTime};
use tracing::debug;

#[derive(Parser)]
#[command(name = "huangli", about = "Chinese lunar almanac (黄历) CLI")]
struct Cli {
    /// Debug logging for the almanac crates (RUST_LOG overrides)
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OfficerArg {
    /// Officers follow the month pillar (changes at the 节 terms)
    MonthPillar,
    /// Officers follow the lunar month number
    LunarMonth,
}

impl From<OfficerArg> for OfficerMode {
    fn from(arg: OfficerArg) -> Self {
        match arg {
            OfficerArg::MonthPillar => OfficerMode::MonthPillar,
            OfficerArg::LunarMonth => OfficerMode::LunarMonth,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Full almanac of a date and time
    Day {
        /// YYYY-MM-DD or YYYY-MM-DDThh:mm
        date: String,
        /// Change the year pillar at 立春 instead of the lunar new year
        #[arg(long)]
        spring: bool,
        /// Month index used for the day officers
        #[arg(long, value_enum, default_value = "month-pillar")]
        officer: OfficerArg,
    },
    /// Lunar date of a civil date
    Lunar {
        /// YYYY-MM-DD
        date: String,
    },
    /// Four pillars plus the thirteen two-hour pillars
    Pillars {
        /// YYYY-MM-DD or YYYY-MM-DDThh:mm
        date: String,
        /// Change the year pillar at 立春 instead of the lunar new year
        #[arg(long)]
        spring: bool,
    },
    /// The 24 solar terms of a civil year
    Terms {
        /// Civil year (1901-2100)
        year: i32,
    },
    /// One summary line per day, evaluated at noon
    Range {
        /// First day, YYYY-MM-DD
        start: String,
        /// Last day (inclusive), YYYY-MM-DD
        end: String,
        /// Change the year pillar at 立春 instead of the lunar new year
        #[arg(long)]
        spring: bool,
        /// Month index used for the day officers
        #[arg(long, value_enum, default_value = "month-pillar")]
        officer: OfficerArg,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Day {
            date,
            spring,
            officer,
        } => {
            let time = require_time(&date);
            let config = make_config(spring, officer);
            let day = require_day(&time, &config);
            print_day(&day);
        }

        Commands::Lunar { date } => {
            let date = require_date(&date);
            let LunarResolution { date: lunar, span_days } =
                resolve_lunar_date(&date).unwrap_or_else(|e| fail(&e));
            println!(
                "{}年 {} {}",
                lunar.year_cn(),
                lunar.month_cn(),
                lunar.day_cn()
            );
            println!(
                "Lunar: {}-{}-{}{} ({} days in month)",
                lunar.year,
                lunar.month,
                lunar.day,
                if lunar.is_leap_month { " (leap)" } else { "" },
                lunar.month_days
            );
            println!("Days since lunar new year: {span_days}");
        }

        Commands::Pillars { date, spring } => {
            let time = require_time(&date);
            let lunar = resolve_lunar_date(&time.date()).unwrap_or_else(|e| fail(&e));
            let terms = resolve_solar_terms(&time.date()).unwrap_or_else(|e| fail(&e));
            let mode = year_mode(spring);
            let p = compute_pillars(
                &time,
                lunar.date.year,
                lunar.span_days,
                terms.next_index,
                mode,
            );
            println!(
                "{}年 {}月 {}日 {}时",
                p.year.name(),
                p.month.name(),
                p.day.name(),
                p.hour.name()
            );
            for (i, hour) in p.hours.iter().enumerate() {
                let marker = if i as u8 == p.block { " *" } else { "" };
                println!("  {} {}{marker}", ALL_BRANCHES[i % 12].name(), hour.name());
            }
        }

        Commands::Terms { year } => {
            let table = SolarTermTable::for_year(year).unwrap_or_else(|e| fail(&e));
            for (term, (month, day)) in table.entries() {
                println!("{year:04}-{month:02}-{day:02}  {}", term.name());
            }
        }

        Commands::Range {
            start,
            end,
            spring,
            officer,
        } => {
            let start = require_date(&start);
            let end = require_date(&end);
            let span = start.days_until(&end);
            if span < 0 {
                fail(&format!("range end {end} is before start {start}"));
            }
            let config = make_config(spring, officer);
            debug!(%start, %end, days = span + 1, "evaluating range");
            for offset in 0..=span {
                let date = start.add_days(offset);
                let time = CivilDateTime {
                    hour: 12,
                    ..CivilDateTime::at_midnight(date)
                };
                let day = require_day(&time, &config);
                println!(
                    "{date} {} {} 宜:{} 忌:{}",
                    day.pillars.day.name(),
                    day.outcome.level_name,
                    day.outcome.good_things.join(" "),
                    day.outcome.bad_things.join(" ")
                );
            }
        }
    }
}

fn print_day(day: &AlmanacDay) {
    let a = &day.attributes;
    let o = &day.outcome;
    let p = &day.pillars;
    println!("{}  {}", day.time, a.weekday.name());
    println!("农历: {}", day.lunar_text());
    println!(
        "干支: {}年 {}月 {}日 {}时  属{}",
        p.year.name(),
        p.month.name(),
        p.day.name(),
        p.hour.name(),
        a.zodiac
    );
    println!(
        "节气: {}  下一节气: {} ({})",
        day.terms.today_name(),
        day.terms.next.name(),
        day.terms.next_date
    );
    println!("冲煞: {}", a.relations.clash());
    println!(
        "建除: {}  {} ({})",
        a.officer.officer.name(),
        a.officer.god.name(),
        a.officer.path_name()
    );
    println!("星宿: {}  纳音: {}", a.lodge, a.nayin);
    println!("九星: {}  胎神: {}", a.flying_stars, a.fetal_god);
    println!("彭祖百忌: {}", a.peng_taboo);
    println!("吉神方位: {}", a.lucky_directions.join(" "));
    println!("五行: {}", a.five_elements.join(""));
    println!(
        "季节: {}  星座: {}  星次: {}  经络: {}",
        a.season.name(),
        a.star_sign,
        a.east_zodiac,
        a.meridian
    );
    if let Some(phase) = a.moon_phase {
        println!("月相: {}", phase.name());
    }
    println!("时辰吉凶: {}", a.lucky_hour_marks().join(""));
    if !day.holidays.is_empty() {
        let groups: Vec<String> = [
            day.holidays.legal_text(),
            day.holidays.other_text(),
            day.holidays.lunar_text(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
        println!("节日: {}", groups.join(","));
    }
    println!("吉神: {}", o.good_gods.join(" "));
    println!("凶神: {}", o.bad_gods.join(" "));
    println!("等第: {} ({})", o.level_name, o.disposition_name);
    println!("宜: {}", o.good_things.join(" "));
    println!("忌: {}", o.bad_things.join(" "));
}

fn make_config(spring: bool, officer: OfficerArg) -> AlmanacConfig {
    AlmanacConfig::default()
        .with_year_pillar(year_mode(spring))
        .with_officer_mode(officer.into())
}

fn year_mode(spring: bool) -> YearPillarMode {
    if spring {
        YearPillarMode::SwitchAtSpring
    } else {
        YearPillarMode::FixedYear
    }
}

fn require_time(s: &str) -> CivilDateTime {
    s.parse()
        .unwrap_or_else(|e| fail(&format!("invalid date/time {s:?}: {e}")))
}

fn require_date(s: &str) -> CivilDate {
    s.parse()
        .unwrap_or_else(|e| fail(&format!("invalid date {s:?}: {e}")))
}

fn require_day(time: &CivilDateTime, config: &AlmanacConfig) -> AlmanacDay {
    compute(time, config).unwrap_or_else(|e| fail(&format!("{time}: {e}")))
}

fn fail(msg: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}
