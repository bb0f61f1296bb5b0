use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use dexcom_client::models::{MinMax, StatRequest, Statistics};
use dexcom_client::services::requests::{date_range_request, statistics_request, EGVS_PATH};
use dexcom_client::services::{interpret, ApiResponse};
use std::collections::HashMap;
use std::hint::black_box;

const STATISTICS_BODY: &str = r#"{"hypoglycemiaRisk": "minimal","min": 39,"max": 287,"mean": 131.20452051788453,"median": 121,"variance": 1836.660387728187,"stdDev": 42.85627594329898,"sum": 597899,"q1": 100,"q2": 121,"q3": 155,"utilizationPercent": 98.89322916666666,"meanDailyCalibrations": 2,"nDays": 16,"nValues": 4557,"nBelowRange": 185,"nWithinRange": 3605,"nAboveRange": 767,"percentBelowRange": 4.0596883914856265,"percentWithinRange": 79.10906298003071,"percentAboveRange": 16.831248628483653}"#;

fn benchmark_requests(c: &mut Criterion) {
    let start = Utc.with_ymd_and_hms(2017, 6, 1, 0, 0, 0).unwrap();
    let end = start + Duration::days(14);

    // A realistic statistics request: one group per time-of-day window
    let mut stats = HashMap::new();
    for (group, hours) in [("overnight", 0), ("morning", 6), ("afternoon", 12), ("evening", 18)] {
        let requests = (0..4u8)
            .map(|i| StatRequest {
                name: format!("{group}-{i}"),
                start_time: start + Duration::hours(hours),
                end_time: start + Duration::hours(hours + 6),
                egv_range: MinMax {
                    min: 70.0 + f64::from(i) * 10.0,
                    max: 180.0,
                },
            })
            .collect::<Vec<_>>();
        stats.insert(group.to_string(), requests);
    }

    let response = ApiResponse::new(200, STATISTICS_BODY);

    let mut group = c.benchmark_group("requests");

    group.bench_function("date_range_request", |b| {
        b.iter(|| date_range_request(EGVS_PATH, black_box("token"), &start, &end))
    });

    group.bench_function("statistics_request", |b| {
        b.iter(|| statistics_request(black_box("token"), &start, &end, black_box(&stats)))
    });

    group.bench_function("interpret_statistics", |b| {
        b.iter(|| interpret::<Statistics>(black_box(&response)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_requests);
criterion_main!(benches);
