//! Performance benchmarks for the Timesheet Interpretation Engine.
//!
//! Covers the hot calculation path directly and a full compute round
//! through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use tower::ServiceExt;

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::calculation::compute_daily_hours;
use timesheet_engine::config::PolicyLoader;
use timesheet_engine::models::ClockEvents;

use axum::{body::Body, http::Request};

fn load_state() -> AppState {
    let loader = PolicyLoader::load("./config/policies.yaml").expect("Failed to load policies");
    AppState::new(loader.into_catalog())
}

fn bench_compute_daily_hours(c: &mut Criterion) {
    let loader = PolicyLoader::load("./config/policies.yaml").expect("Failed to load policies");
    let catalog = loader.into_catalog();
    let policy = catalog.resolve("H4").expect("H4 policy").clone();

    let date = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
    let events = ClockEvents {
        clock_in: date.and_hms_opt(7, 0, 0).unwrap(),
        clock_out: date.and_hms_opt(18, 0, 0).unwrap(),
    };

    c.bench_function("compute_daily_hours_h4_friday", |b| {
        b.iter(|| {
            compute_daily_hours(
                black_box(&policy),
                black_box("emp_001"),
                black_box(date),
                false,
                Some(black_box(&events)),
            )
            .unwrap()
        })
    });
}

fn bench_catalog_resolve(c: &mut Criterion) {
    let loader = PolicyLoader::load("./config/policies.yaml").expect("Failed to load policies");
    let catalog = loader.into_catalog();

    c.bench_function("catalog_resolve", |b| {
        b.iter(|| catalog.resolve(black_box("H4")).unwrap())
    });
}

fn bench_compute_through_router(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(load_state());

    let body = serde_json::json!({
        "employee_id": "emp_001",
        "date": "2026-03-06",
        "policy_code": "H4",
        "clock_in": "2026-03-06T07:00:00",
        "clock_out": "2026-03-06T18:00:00"
    })
    .to_string();

    c.bench_function("compute_through_router", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/records")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_compute_daily_hours,
    bench_catalog_resolve,
    bench_compute_through_router
);
criterion_main!(benches);
