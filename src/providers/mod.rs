// ABOUTME: Weather data provider integrations for external forecast and air quality services
// ABOUTME: Unifies access to hourly forecast and European AQI series behind async traits
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::config::environment::LocationConfig;
use crate::errors::AppResult;
use crate::models::{AirQualityResponse, ForecastResponse};
use async_trait::async_trait;

pub mod open_meteo;

pub use open_meteo::{MockWeatherProvider, OpenMeteoClient, OpenMeteoClientConfig};

/// Source of hourly weather forecasts for a fixed location.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the hourly forecast series for the given location.
    ///
    /// Timestamps in the response are local wall-clock stamps in the
    /// location's timezone.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the source cannot be reached or
    /// responds with an unusable payload.
    async fn fetch_forecast(&self, location: &LocationConfig) -> AppResult<ForecastResponse>;
}

/// Source of hourly European AQI series for a fixed location.
#[async_trait]
pub trait AirQualityProvider: Send + Sync {
    /// Fetch the hourly European AQI series for the given location.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the source cannot be reached or
    /// responds with an unusable payload.
    async fn fetch_air_quality(&self, location: &LocationConfig) -> AppResult<AirQualityResponse>;
}
