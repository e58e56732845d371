// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use napline_schedule::{MAX_NAPS, Minutes, PlannerConfig, assess, generate, parse_time};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let cfg = PlannerConfig::default();
    for naps in [0usize, 2, MAX_NAPS] {
        group.bench_function(format!("naps{naps}"), |b| {
            b.iter(|| black_box(generate(black_box(6), naps, Minutes::hm(7, 30), &cfg)));
        });
    }
    // Every band, every count.
    group.throughput(Throughput::Elements(256 * (MAX_NAPS as u64 + 1)));
    group.bench_function("all_ages_all_counts", |b| {
        b.iter(|| {
            let mut total = 0;
            for age in 0..=u8::MAX {
                for naps in 0..=MAX_NAPS {
                    total += generate(age, naps, Minutes::hm(6, 45), &cfg).bedtime.get();
                }
            }
            black_box(total)
        });
    });
    group.finish();
}

fn bench_assess(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let schedule = generate(7, 3, Minutes::hm(6, 45), &cfg);
    c.bench_function("assess_three_naps", |b| {
        b.iter(|| black_box(assess(black_box(&schedule), 7, &cfg)));
    });
}

fn bench_parse(c: &mut Criterion) {
    let inputs = ["7:30", "07:30", "7:30am", "12:05 PM", "23:59", "bogus"];
    c.bench_function("parse_time_mixed", |b| {
        b.iter(|| {
            let ok = inputs
                .iter()
                .filter(|s| parse_time(black_box(s)).is_ok())
                .count();
            black_box(ok)
        });
    });
}

criterion_group!(benches, bench_generate, bench_assess, bench_parse);
criterion_main!(benches);
