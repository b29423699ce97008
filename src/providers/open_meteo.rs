// ABOUTME: Open-Meteo API client for hourly weather forecast and air quality retrieval
// ABOUTME: Implements the forecast and air quality provider traits plus a canned mock for tests

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors

//! Open-Meteo API Client
//!
//! Client for the free Open-Meteo forecast and air-quality APIs. Both
//! endpoints take coordinates plus an hourly field list and return
//! index-aligned series; no authentication is required.
//!
//! Upstream documentation:
//! - Forecast: <https://open-meteo.com/en/docs>
//! - Air quality: <https://open-meteo.com/en/docs/air-quality-api>
//!
//! # Example
//! ```rust,ignore
//! use nightvent::providers::{ForecastProvider, OpenMeteoClient, OpenMeteoClientConfig};
//!
//! let client = OpenMeteoClient::new(OpenMeteoClientConfig::default());
//! let forecast = client.fetch_forecast(&location).await?;
//! ```

use crate::config::environment::LocationConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{AirQualityResponse, ForecastResponse};
use crate::providers::{AirQualityProvider, ForecastProvider};
use crate::utils::http_client::upstream_client;
use async_trait::async_trait;

/// Service name used in forecast error messages
const FORECAST_SERVICE: &str = "Open-Meteo API";
/// Service name used in air quality error messages
const AIR_QUALITY_SERVICE: &str = "Open-Meteo Air Quality API";

/// Hourly fields requested from the forecast endpoint
const FORECAST_HOURLY_FIELDS: &str = "temperature_2m,wind_speed_10m,relative_humidity_2m,rain";
/// Hourly fields requested from the air quality endpoint
const AIR_QUALITY_HOURLY_FIELDS: &str = "european_aqi";

/// Open-Meteo client configuration
#[derive(Debug, Clone)]
pub struct OpenMeteoClientConfig {
    /// Base URL for the forecast API (default: <https://api.open-meteo.com/v1>)
    pub forecast_base_url: String,
    /// Base URL for the air quality API (default: <https://air-quality-api.open-meteo.com/v1>)
    pub air_quality_base_url: String,
    /// Air quality model domain (e.g. `cams_europe`)
    pub air_quality_domain: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
}

impl Default for OpenMeteoClientConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: "https://api.open-meteo.com/v1".to_owned(),
            air_quality_base_url: "https://air-quality-api.open-meteo.com/v1".to_owned(),
            air_quality_domain: "cams_europe".to_owned(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Open-Meteo API client
pub struct OpenMeteoClient {
    config: OpenMeteoClientConfig,
    http_client: reqwest::Client,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client
    #[must_use]
    pub fn new(config: OpenMeteoClientConfig) -> Self {
        let http_client = upstream_client(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }
}

/// Map a transport error onto the unavailable/error split: timeouts and
/// connection failures are `ExternalServiceUnavailable`, everything else is
/// `ExternalServiceError`. The original error stays attached as the source.
fn request_failed(service: &'static str, error: reqwest::Error) -> AppError {
    let mapped = if error.is_timeout() || error.is_connect() {
        AppError::external_unavailable(service, error.to_string())
    } else {
        AppError::external_service(service, error.to_string())
    };
    mapped.with_source(error)
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    async fn fetch_forecast(&self, location: &LocationConfig) -> AppResult<ForecastResponse> {
        let url = format!("{}/forecast", self.config.forecast_base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", FORECAST_HOURLY_FIELDS.to_owned()),
                ("timezone", location.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| request_failed(FORECAST_SERVICE, e))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                FORECAST_SERVICE,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(FORECAST_SERVICE, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl AirQualityProvider for OpenMeteoClient {
    async fn fetch_air_quality(&self, location: &LocationConfig) -> AppResult<AirQualityResponse> {
        let url = format!("{}/air-quality", self.config.air_quality_base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", AIR_QUALITY_HOURLY_FIELDS.to_owned()),
                ("domains", self.config.air_quality_domain.clone()),
                ("timezone", location.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| request_failed(AIR_QUALITY_SERVICE, e))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                AIR_QUALITY_SERVICE,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::external_service(AIR_QUALITY_SERVICE, format!("JSON parse error: {e}"))
        })
    }
}

/// Canned-response weather provider for tests (no API calls)
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider {
    forecast: Option<ForecastResponse>,
    air_quality: Option<AirQualityResponse>,
    fail_forecast: bool,
    fail_air_quality: bool,
}

impl MockWeatherProvider {
    /// Create a mock that serves empty payloads
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this forecast payload
    #[must_use]
    pub fn with_forecast(mut self, forecast: ForecastResponse) -> Self {
        self.forecast = Some(forecast);
        self
    }

    /// Serve this air quality payload
    #[must_use]
    pub fn with_air_quality(mut self, air_quality: AirQualityResponse) -> Self {
        self.air_quality = Some(air_quality);
        self
    }

    /// Fail every forecast fetch with an unavailable error
    #[must_use]
    pub fn failing_forecast(mut self) -> Self {
        self.fail_forecast = true;
        self
    }

    /// Fail every air quality fetch with an unavailable error
    #[must_use]
    pub fn failing_air_quality(mut self) -> Self {
        self.fail_air_quality = true;
        self
    }
}

#[async_trait]
impl ForecastProvider for MockWeatherProvider {
    async fn fetch_forecast(&self, _location: &LocationConfig) -> AppResult<ForecastResponse> {
        if self.fail_forecast {
            return Err(AppError::external_unavailable(
                FORECAST_SERVICE,
                "mock forecast failure",
            ));
        }
        Ok(self.forecast.clone().unwrap_or_default())
    }
}

#[async_trait]
impl AirQualityProvider for MockWeatherProvider {
    async fn fetch_air_quality(&self, _location: &LocationConfig) -> AppResult<AirQualityResponse> {
        if self.fail_air_quality {
            return Err(AppError::external_unavailable(
                AIR_QUALITY_SERVICE,
                "mock air quality failure",
            ));
        }
        Ok(self.air_quality.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    fn location() -> LocationConfig {
        LocationConfig {
            latitude: 52.52,
            longitude: 13.405,
            timezone: "Europe/Berlin".to_owned(),
        }
    }

    #[test]
    fn test_default_config_points_at_public_endpoints() {
        let config = OpenMeteoClientConfig::default();
        assert_eq!(config.forecast_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(
            config.air_quality_base_url,
            "https://air-quality-api.open-meteo.com/v1"
        );
        assert_eq!(config.air_quality_domain, "cams_europe");
    }

    #[tokio::test]
    async fn test_mock_serves_canned_forecast() {
        let forecast = ForecastResponse {
            latitude: 52.52,
            longitude: 13.405,
            hourly: None,
        };
        let provider = MockWeatherProvider::new().with_forecast(forecast);

        let fetched = provider.fetch_forecast(&location()).await.unwrap();
        assert!((fetched.latitude - 52.52).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_failing_mock_reports_unavailable() {
        let provider = MockWeatherProvider::new().failing_forecast();

        let error = provider.fetch_forecast(&location()).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    }
}
