// ABOUTME: Integration tests for the one-shot nightly evaluation flow
// ABOUTME: Covers fetch-evaluate-notify orchestration and its degraded and failure paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::create_test_server_resources;
use helpers::fixtures;
use nightvent::errors::ErrorCode;
use nightvent::models::WindowDecision;
use nightvent::notifications::MockNotifier;
use nightvent::providers::MockWeatherProvider;
use std::sync::Arc;

#[tokio::test]
async fn test_nightly_run_delivers_the_rendered_message() {
    let weather = MockWeatherProvider::new()
        .with_forecast(fixtures::calm_night(13.5))
        .with_air_quality(fixtures::air_quality_from(fixtures::air_quality_payload(
            &fixtures::aqi_curve(42.0),
        )));
    let notifier = Arc::new(MockNotifier::new());
    let resources = create_test_server_resources(weather, notifier.clone());

    let recommendation = resources.nightly_recommendation().await.unwrap();
    assert_eq!(
        recommendation.decision,
        WindowDecision::CrackOneToThreeCmOvernight
    );

    let receipt = resources
        .notifier
        .notify(&recommendation.message)
        .await
        .unwrap();
    assert_eq!(receipt.status, 1);

    assert_eq!(
        notifier.sent_messages().await,
        vec!["Leave the windows cracked (1-3cm) overnight".to_owned()]
    );
}

#[tokio::test]
async fn test_nightly_run_fails_without_a_forecast() {
    let weather = MockWeatherProvider::new().failing_forecast();
    let resources = create_test_server_resources(weather, Arc::new(MockNotifier::new()));

    let error = resources.nightly_recommendation().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_nightly_run_degrades_without_air_quality() {
    let weather = MockWeatherProvider::new()
        .with_forecast(fixtures::calm_night(16.5))
        .failing_air_quality();
    let resources = create_test_server_resources(weather, Arc::new(MockNotifier::new()));

    let recommendation = resources.nightly_recommendation().await.unwrap();

    // Without air quality the open-overnight band stands undowngraded.
    assert_eq!(recommendation.decision, WindowDecision::OpenOvernight);
    assert_eq!(recommendation.max_european_aqi, None);
}

#[tokio::test]
async fn test_nightly_run_delivery_failure_surfaces() {
    let weather = MockWeatherProvider::new().with_forecast(fixtures::calm_night(13.5));
    let notifier = Arc::new(MockNotifier::failing());
    let resources = create_test_server_resources(weather, notifier.clone());

    let recommendation = resources.nightly_recommendation().await.unwrap();
    let error = resources
        .notifier
        .notify(&recommendation.message)
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(notifier.sent_messages().await.is_empty());
}
