// Benchmark for screen navigation and header derivation
// Measures a year of stepping in each view mode plus label formatting

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use step_tracker::models::view_mode::ViewMode;
use step_tracker::services::navigation::TrackerState;
use step_tracker::services::presentation::render_header;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for mode in ViewMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| {
                let mut state = TrackerState::new(mode, start_date());
                for _ in 0..365 {
                    state.advance();
                }
                black_box(state.current_date())
            });
        });
    }

    group.finish();
}

fn bench_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_header");

    for mode in ViewMode::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(mode), &mode, |b, &mode| {
            b.iter(|| render_header(black_box(mode), black_box(start_date())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_navigation, bench_headers);
criterion_main!(benches);
