// Copyright 2025 the Napline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use napline_adjust::{
    ClockFace, DialSpan, DragState, DragTarget, Grab, Surface, VerticalTimeline, apply_drag,
    grab_at,
};
use napline_schedule::{Boundary, Minutes, PlannerConfig, generate};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn pointer_path(len: usize, height: f64) -> Vec<f64> {
    let mut rng = Rng::new(0x5EED_D4A6_0F0F_1234);
    (0..len).map(|_| rng.next_f64() * height).collect()
}

fn bench_apply(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let schedule = generate(6, 3, Minutes::hm(7, 30), &cfg);
    let mut group = c.benchmark_group("apply_drag");
    for (name, target) in [
        ("wake", DragTarget::Wake),
        ("nap_end", DragTarget::NapEnd(1)),
        (
            "nap_move",
            DragTarget::NapMove {
                index: 1,
                grab_offset: 20,
            },
        ),
        ("bedtime", DragTarget::Bedtime),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(apply_drag(&schedule, target, black_box(Minutes(900)), &cfg)));
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let schedule = generate(6, 3, Minutes::hm(7, 30), &cfg);
    let timeline = VerticalTimeline::new(
        Rect::new(0.0, 0.0, 120.0, 960.0),
        Minutes::hm(6, 0),
        Minutes::hm(22, 0),
    );
    let dial = ClockFace::new(Point::new(200.0, 200.0), 150.0, 24.0, DialSpan::Day);
    let path = pointer_path(256, 960.0);

    let mut group = c.benchmark_group("drag_session");
    group.throughput(Throughput::Elements(path.len() as u64));
    let surfaces: [(&str, &dyn Surface); 2] = [("timeline", &timeline), ("clock", &dial)];
    for (name, surface) in surfaces {
        group.bench_function(name, |b| {
            b.iter_batched(
                || schedule.clone(),
                |mut s| {
                    let mut drag = DragState::new();
                    let _ = drag.begin(Grab::NapBody(1), s.naps[1].start, &s);
                    for &y in &path {
                        let near = s.naps[1].start;
                        let m = surface.minute_at(Point::new(60.0, y), near);
                        let _ = drag.update(&mut s, m, &cfg);
                    }
                    drag.end();
                    black_box(s)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_grab(c: &mut Criterion) {
    let cfg = PlannerConfig::default();
    let schedule = generate(6, 3, Minutes::hm(7, 30), &cfg);
    let timeline = VerticalTimeline::new(
        Rect::new(0.0, 0.0, 120.0, 960.0),
        Minutes::hm(6, 0),
        Minutes::hm(22, 0),
    );
    let path = pointer_path(256, 960.0);
    c.bench_function("grab_at_timeline", |b| {
        b.iter(|| {
            let handles = path
                .iter()
                .filter(|&&y| {
                    matches!(
                        grab_at(&timeline, &schedule, Point::new(60.0, y), 6.0),
                        Some(Grab::Handle(Boundary::NapEnd(_) | Boundary::NapStart(_)))
                    )
                })
                .count();
            black_box(handles)
        });
    });
}

criterion_group!(benches, bench_apply, bench_session, bench_grab);
criterion_main!(benches);
