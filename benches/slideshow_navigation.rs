// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for slideshow navigation.
//!
//! Measures the performance of:
//! - Stepping through slides with wrap-around
//! - Auto-play polling on every animation tick
//! - Rebuilding the gallery (new generation, new load requests)

use criterion::{criterion_group, criterion_main, Criterion};
use folio::content::default_gallery;
use folio::gallery::{Input, Slideshow};
use std::hint::black_box;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_secs(5);

fn bench_manual_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow_navigation");
    let now = Instant::now();
    let (mut slideshow, _) = Slideshow::new(default_gallery(), INTERVAL, now);

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..slideshow.len() {
                slideshow.handle_input(black_box(Input::NextControl), now);
            }
            black_box(slideshow.current_index());
        });
    });

    group.bench_function("indicator_jump", |b| {
        b.iter(|| {
            slideshow.handle_input(black_box(Input::Indicator(11)), now);
            slideshow.handle_input(black_box(Input::Indicator(3)), now);
        });
    });

    group.finish();
}

fn bench_auto_play_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow_navigation");
    let start = Instant::now();
    let (mut slideshow, _) = Slideshow::new(default_gallery(), INTERVAL, start);
    let mut now = start;

    group.bench_function("tick", |b| {
        b.iter(|| {
            now += Duration::from_millis(100);
            black_box(slideshow.tick(black_box(now)));
        });
    });

    group.finish();
}

fn bench_update_gallery(c: &mut Criterion) {
    let mut group = c.benchmark_group("slideshow_navigation");
    let now = Instant::now();
    let (mut slideshow, _) = Slideshow::new(default_gallery(), INTERVAL, now);

    group.bench_function("update_gallery", |b| {
        b.iter(|| {
            let requests = slideshow.update_gallery(default_gallery(), now);
            black_box(requests.len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_manual_navigation,
    bench_auto_play_tick,
    bench_update_gallery
);
criterion_main!(benches);
