use criterion::{Criterion, black_box, criterion_group, criterion_main};
use huangli_base::{
    YearPillarMode, compute_pillars, decode_solar_terms, resolve_lunar_date, resolve_solar_terms,
    year_solar_term_days,
};
use huangli_time::{CivilDate, CivilDateTime};

fn decoder_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("packed");
    group.bench_function("decode_solar_terms", |b| {
        b.iter(|| decode_solar_terms(black_box(0x0005_5aa5_5a56_96a5)))
    });
    group.bench_function("year_solar_term_days", |b| {
        b.iter(|| year_solar_term_days(black_box(2024)))
    });
    group.finish();
}

fn resolver_bench(c: &mut Criterion) {
    let after_new_year = CivilDate {
        year: 2024,
        month: 11,
        day: 30,
    };
    let before_new_year = CivilDate {
        year: 2034,
        month: 1,
        day: 15,
    };

    let mut group = c.benchmark_group("resolver");
    group.bench_function("lunar_forward_walk", |b| {
        b.iter(|| resolve_lunar_date(black_box(&after_new_year)))
    });
    group.bench_function("lunar_backward_walk", |b| {
        b.iter(|| resolve_lunar_date(black_box(&before_new_year)))
    });
    group.bench_function("solar_terms", |b| {
        b.iter(|| resolve_solar_terms(black_box(&after_new_year)))
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let time = CivilDateTime {
        year: 2026,
        month: 1,
        day: 29,
        hour: 1,
        minute: 30,
    };
    c.bench_function("compute_pillars", |b| {
        b.iter(|| {
            compute_pillars(
                black_box(&time),
                2025,
                -19,
                2,
                YearPillarMode::SwitchAtSpring,
            )
        })
    });
}

criterion_group!(benches, decoder_bench, resolver_bench, pillars_bench);
criterion_main!(benches);
