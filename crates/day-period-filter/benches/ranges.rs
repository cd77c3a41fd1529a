use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use day_period_filter::{compute_ranges, DayPeriod, TimezoneResolver};
use std::hint::black_box;

fn bench_ranges(c: &mut Criterion) {
    let resolver = TimezoneResolver::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());

    c.bench_function("resolve_iana", |b| {
        b.iter(|| resolver.resolve(black_box("Australia/Sydney")))
    });

    c.bench_function("resolve_windows", |b| {
        b.iter(|| resolver.resolve(black_box("Line Islands Standard Time")))
    });

    let sydney = resolver.resolve("Australia/Sydney");
    c.bench_function("compute_ranges_split", |b| {
        b.iter(|| compute_ranges(black_box(DayPeriod::Am), black_box(&sydney)))
    });
}

criterion_group!(benches, bench_ranges);
criterion_main!(benches);
