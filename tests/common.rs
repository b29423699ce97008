// ABOUTME: Shared fixtures for the integration test binaries
// ABOUTME: Provides configuration builders and mock-backed server resource wiring
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared builders for `nightvent` integration tests.
//!
//! Each test binary pulls these in through `mod common`; everything here is
//! deliberately deterministic and network-free.

use nightvent::{
    config::environment::{
        AirQualityConfig, ExternalServicesConfig, LocationConfig, LogLevel, OpenMeteoConfig,
        PushoverConfig, ServerConfig,
    },
    config::thresholds::VentilationThresholds,
    engine::VentilationEngine,
    notifications::MockNotifier,
    providers::MockWeatherProvider,
    server::ServerResources,
};
use std::sync::Arc;

/// A valid test configuration pointing at unreachable local endpoints
pub fn create_test_server_config() -> ServerConfig {
    ServerConfig {
        http_port: 8080,
        log_level: LogLevel::Info,
        location: LocationConfig {
            latitude: 52.52,
            longitude: 13.405,
            timezone: "Europe/Berlin".to_owned(),
        },
        external_services: ExternalServicesConfig {
            open_meteo: OpenMeteoConfig {
                base_url: "http://localhost:9/v1".to_owned(),
            },
            air_quality: AirQualityConfig {
                base_url: "http://localhost:9/v1".to_owned(),
                domain: "cams_europe".to_owned(),
            },
            pushover: PushoverConfig {
                base_url: "http://localhost:9/1".to_owned(),
                token: "test-token".to_owned(),
                user: "test-user".to_owned(),
            },
        },
        thresholds: VentilationThresholds::default(),
    }
}

/// Build server resources around a mock weather provider and mock notifier.
///
/// Callers keep their own `Arc<MockNotifier>` clone to inspect deliveries.
pub fn create_test_server_resources(
    weather: MockWeatherProvider,
    notifier: Arc<MockNotifier>,
) -> Arc<ServerResources> {
    let engine = VentilationEngine::new(VentilationThresholds::default()).unwrap();
    let weather = Arc::new(weather);

    Arc::new(ServerResources::new(
        engine,
        weather.clone(),
        weather,
        notifier,
        Arc::new(create_test_server_config()),
    ))
}
