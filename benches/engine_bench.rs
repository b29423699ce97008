// ABOUTME: Criterion benchmarks for the ventilation decision engine
// ABOUTME: Measures overnight aggregation, band decisions, and payload parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Criterion benchmarks for the ventilation decision engine.
//!
//! Measures overnight window aggregation over forecast horizons of varying
//! length, the band decision itself, and Open-Meteo payload deserialization.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nightvent::config::thresholds::VentilationThresholds;
use nightvent::engine::{
    effective_night_low, overnight_max_aqi, overnight_metrics, window_decision, VentilationEngine,
};
use nightvent::models::{AirQualityResponse, ForecastResponse, HourlyAirQuality, HourlyForecast};

/// One night of hourly samples, evening through the following morning
const SINGLE_NIGHT_HOURS: usize = 18;
/// A week-long hourly forecast horizon
const WEEK_HORIZON_HOURS: usize = 168;

fn hourly_stamps(count: usize) -> Vec<Option<String>> {
    (0..count)
        .map(|index| {
            let day = 1 + index / 24;
            let hour = index % 24;
            Some(format!("2025-03-{day:02}T{hour:02}:00"))
        })
        .collect()
}

/// Generate a synthetic hourly forecast with plausible value ranges
#[allow(clippy::cast_precision_loss)]
fn generate_forecast(hours: usize) -> ForecastResponse {
    let temperature = (0..hours)
        .map(|index| Some(10.0 + ((index * 7) % 120) as f64 / 10.0))
        .collect();
    let wind = (0..hours)
        .map(|index| Some(((index * 13) % 35) as f64))
        .collect();
    let humidity = (0..hours)
        .map(|index| Some(40.0 + ((index * 11) % 55) as f64))
        .collect();
    let rain = (0..hours)
        .map(|index| Some(if index % 9 == 0 { 0.4 } else { 0.0 }))
        .collect();

    ForecastResponse {
        latitude: 52.52,
        longitude: 13.405,
        hourly: Some(HourlyForecast {
            time: Some(hourly_stamps(hours)),
            temperature_2m: Some(temperature),
            wind_speed_10m: Some(wind),
            relative_humidity_2m: Some(humidity),
            rain: Some(rain),
        }),
    }
}

/// Generate a synthetic hourly European AQI series
#[allow(clippy::cast_precision_loss)]
fn generate_air_quality(hours: usize) -> AirQualityResponse {
    let aqi = (0..hours)
        .map(|index| Some(20.0 + ((index * 17) % 70) as f64))
        .collect();

    AirQualityResponse {
        latitude: 52.52,
        longitude: 13.405,
        hourly: Some(HourlyAirQuality {
            time: Some(hourly_stamps(hours)),
            european_aqi: Some(aqi),
        }),
    }
}

/// Benchmark overnight aggregation across forecast horizons
#[allow(clippy::cast_possible_truncation)]
fn bench_overnight_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("overnight_aggregation");

    let horizons = [
        (SINGLE_NIGHT_HOURS, generate_forecast(SINGLE_NIGHT_HOURS)),
        (48, generate_forecast(48)),
        (WEEK_HORIZON_HOURS, generate_forecast(WEEK_HORIZON_HOURS)),
    ];

    for (hours, forecast) in &horizons {
        group.throughput(Throughput::Elements(*hours as u64));
        group.bench_with_input(
            BenchmarkId::new("overnight_metrics", hours),
            forecast,
            |b, forecast| {
                b.iter(|| overnight_metrics(black_box(Some(forecast))));
            },
        );
    }

    let air_quality = generate_air_quality(WEEK_HORIZON_HOURS);
    group.throughput(Throughput::Elements(WEEK_HORIZON_HOURS as u64));
    group.bench_function("overnight_max_aqi_week_horizon", |b| {
        b.iter(|| overnight_max_aqi(black_box(Some(&air_quality))));
    });

    group.finish();
}

/// Benchmark the band decision on precomputed metrics
fn bench_window_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_decision");

    let thresholds = VentilationThresholds::default();
    let forecast = generate_forecast(SINGLE_NIGHT_HOURS);
    let metrics = overnight_metrics(Some(&forecast));

    group.bench_function("decision_from_metrics", |b| {
        b.iter(|| window_decision(black_box(&metrics), black_box(Some(42.0)), &thresholds));
    });

    group.bench_function("effective_night_low", |b| {
        b.iter(|| effective_night_low(black_box(&metrics), &thresholds));
    });

    group.finish();
}

/// Benchmark the full fetch-free recommendation path
fn bench_recommendation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendation");

    let engine = VentilationEngine::new(VentilationThresholds::default()).unwrap();
    let forecast = generate_forecast(SINGLE_NIGHT_HOURS);
    let air_quality = generate_air_quality(SINGLE_NIGHT_HOURS);

    group.bench_function("forecast_and_air_quality", |b| {
        b.iter(|| {
            engine.recommendation(black_box(Some(&forecast)), black_box(Some(&air_quality)))
        });
    });

    group.bench_function("forecast_only", |b| {
        b.iter(|| engine.recommendation(black_box(Some(&forecast)), black_box(None)));
    });

    group.bench_function("absent_forecast", |b| {
        b.iter(|| engine.recommendation(black_box(None), black_box(None)));
    });

    group.finish();
}

/// Benchmark Open-Meteo payload deserialization
#[allow(clippy::cast_possible_truncation)]
fn bench_payload_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_parsing");

    let horizons = [
        (SINGLE_NIGHT_HOURS, generate_forecast(SINGLE_NIGHT_HOURS)),
        (WEEK_HORIZON_HOURS, generate_forecast(WEEK_HORIZON_HOURS)),
    ];

    for (hours, forecast) in &horizons {
        let payload = serde_json::to_string(forecast).unwrap();
        group.throughput(Throughput::Elements(*hours as u64));
        group.bench_with_input(
            BenchmarkId::new("forecast_response", hours),
            &payload,
            |b, payload| {
                b.iter(|| serde_json::from_str::<ForecastResponse>(black_box(payload)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_overnight_aggregation,
    bench_window_decision,
    bench_recommendation,
    bench_payload_parsing,
);
criterion_main!(benches);
