use criterion::{Criterion, black_box, criterion_group, criterion_main};
use huangli_engine::{AlmanacConfig, OfficerMode, RuleContext, compute, evaluate};
use huangli_time::CivilDateTime;

fn compute_bench(c: &mut Criterion) {
    let noon = CivilDateTime {
        year: 2024,
        month: 2,
        day: 10,
        hour: 12,
        minute: 0,
    };
    let late = CivilDateTime {
        year: 2034,
        month: 1,
        day: 15,
        hour: 23,
        minute: 30,
    };
    let lunar_officer = AlmanacConfig::default().with_officer_mode(OfficerMode::LunarMonth);

    let mut group = c.benchmark_group("compute");
    group.bench_function("default_config", |b| {
        b.iter(|| compute(black_box(&noon), &AlmanacConfig::default()))
    });
    group.bench_function("before_new_year_late_night", |b| {
        b.iter(|| compute(black_box(&late), &AlmanacConfig::default()))
    });
    group.bench_function("lunar_month_officer", |b| {
        b.iter(|| compute(black_box(&noon), &lunar_officer))
    });
    group.finish();
}

fn rule_engine_bench(c: &mut Criterion) {
    let time = CivilDateTime {
        year: 2026,
        month: 1,
        day: 29,
        hour: 1,
        minute: 30,
    };
    let Ok(day) = compute(&time, &AlmanacConfig::default()) else {
        return;
    };
    let ctx = RuleContext::new(&time, &day.lunar, &day.pillars, &day.terms, &day.attributes);
    c.bench_function("evaluate_rule_tables", |b| b.iter(|| evaluate(black_box(&ctx))));
}

criterion_group!(benches, compute_bench, rule_engine_bench);
criterion_main!(benches);
