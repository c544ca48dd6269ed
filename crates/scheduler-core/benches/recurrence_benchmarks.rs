use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scheduler_core::recurrence::RecurrenceManager;
use scheduler_core::rule::RecurrenceRule;

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 26).unwrap()
}

fn bench_rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");

    for rule in ["d 7", "y", "w 1,3,5", "m -1,-2,15 1,4,7,10"] {
        group.bench_with_input(BenchmarkId::from_parameter(rule), rule, |b, rule| {
            b.iter(|| RecurrenceRule::parse(black_box(rule)).unwrap())
        });
    }

    group.finish();
}

fn bench_next_date(c: &mut Criterion) {
    let manager = RecurrenceManager::with_defaults();
    let mut group = c.benchmark_group("next_date");

    let cases = [
        ("daily_far_anchor", "16890220", "d 7"),
        ("yearly_old_anchor", "19000101", "y"),
        ("weekly", "20240101", "w 7"),
        ("monthly_last_day", "20240101", "m -1"),
        ("monthly_leap_day", "20960301", "m 29 2"),
    ];

    for (name, date, repeat) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                manager
                    .next_date(black_box(now()), black_box(date), black_box(repeat))
                    .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_exhausted_scan(c: &mut Criterion) {
    let manager = RecurrenceManager::with_defaults();

    c.bench_function("exhausted_scan", |b| {
        b.iter(|| {
            manager
                .next_date(black_box(now()), black_box("20240101"), black_box("m 31 2"))
                .unwrap_err()
        })
    });
}

criterion_group!(benches, bench_rule_parsing, bench_next_date, bench_exhausted_scan);
criterion_main!(benches);
