//! Performance benchmarks for the Ferie Engine.
//!
//! Covers the pure calculations (accrual over growing spans, balance reports
//! with many leave entries, holiday generation) and one end-to-end request
//! through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use ferie_engine::api::{AppState, create_router};
use ferie_engine::calculation::{
    Province, accrue_hours_between, add_days, calculate_balance, get_holidays_for_year, parse_date,
};
use ferie_engine::config::{AccrualRates, ConfigLoader, FERIE_HOURS_PER_MONTH};
use ferie_engine::models::LeaveEntry;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates `count` 8-hour leave entries, one per day from the start date.
fn create_leaves(count: usize) -> Vec<LeaveEntry> {
    let first = parse_date("2020-01-01").unwrap();
    (0..count)
        .map(|i| LeaveEntry::new(add_days(first, i as i64), 8.0, format!("leave_{:04}", i)))
        .collect()
}

/// Benchmark: accrual over spans from one month to ten years.
fn bench_accrual_scaling(c: &mut Criterion) {
    let start = parse_date("2015-03-17").unwrap();
    let mut group = c.benchmark_group("accrual");

    for years in [0usize, 1, 5, 10] {
        let end = add_days(start, (years as i64) * 365 + 30);
        group.throughput(Throughput::Elements((years * 12 + 1) as u64));
        group.bench_with_input(BenchmarkId::new("years", years), &end, |b, end| {
            b.iter(|| {
                accrue_hours_between(black_box(start), black_box(*end), FERIE_HOURS_PER_MONTH)
            })
        });
    }

    group.finish();
}

/// Benchmark: balance report with a growing leave log.
fn bench_balance(c: &mut Criterion) {
    let start = parse_date("2020-01-01").unwrap();
    let as_of = parse_date("2025-12-31").unwrap();
    let rates = AccrualRates::default();
    let mut group = c.benchmark_group("balance");

    for count in [0usize, 10, 100, 1000] {
        let leaves = create_leaves(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("leaves", count), &leaves, |b, leaves| {
            b.iter(|| calculate_balance(black_box(as_of), black_box(start), leaves, &rates))
        });
    }

    group.finish();
}

/// Benchmark: one year of holidays.
fn bench_holidays(c: &mut Criterion) {
    c.bench_function("holidays_milano", |b| {
        b.iter(|| get_holidays_for_year(black_box(2025), Province::Milano))
    });
}

/// Benchmark: POST /balance through the router.
fn bench_balance_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let leaves: Vec<serde_json::Value> = (1..=28)
        .map(|day| {
            serde_json::json!({
                "date": format!("2025-02-{:02}", day),
                "hours": 4.0,
                "note": "half day"
            })
        })
        .collect();
    let body = serde_json::json!({
        "as_of": "2025-12-31",
        "start": "2020-01-01",
        "leaves": leaves
    })
    .to_string();

    c.bench_function("balance_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/balance")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_accrual_scaling,
    bench_balance,
    bench_holidays,
    bench_balance_endpoint,
);
criterion_main!(benches);
