// ABOUTME: Decision engine facade combining overnight aggregation with the band decision logic
// ABOUTME: Validates thresholds once at construction, then evaluates forecasts into recommendations

//! Ventilation Engine
//!
//! The engine is deliberately pure: it holds nothing but a validated
//! [`VentilationThresholds`] record and turns forecast payloads into
//! [`WindowRecommendation`] values. Fetching those payloads and delivering the
//! result are the providers' and notifier's jobs.
//!
//! # Example
//!
//! ```rust,ignore
//! use nightvent::config::thresholds::VentilationThresholds;
//! use nightvent::engine::VentilationEngine;
//!
//! let engine = VentilationEngine::new(VentilationThresholds::default())?;
//! let recommendation = engine.recommendation(Some(&forecast), Some(&air_quality));
//! println!("{}", recommendation.message);
//! ```

pub mod decision;
pub mod overnight;

// Re-export the engine's working parts
pub use decision::{effective_night_low, temperature_band_decision, window_decision};
pub use overnight::{
    overnight_max_aqi, overnight_metrics, OvernightMetrics, BEDTIME_HOUR, WAKE_HOUR,
};

use crate::config::thresholds::VentilationThresholds;
use crate::errors::AppResult;
use crate::models::{AirQualityResponse, ForecastResponse, WindowDecision, WindowRecommendation};

/// Nightly decision engine.
///
/// Thresholds are validated exactly once, at construction; every evaluation
/// after that is infallible.
#[derive(Debug, Clone)]
pub struct VentilationEngine {
    thresholds: VentilationThresholds,
}

impl VentilationEngine {
    /// Build an engine from a threshold record.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the five temperature bands are not ordered
    /// ascending.
    pub fn new(thresholds: VentilationThresholds) -> AppResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Full nightly recommendation: the decision, its message, and the
    /// aggregated metrics that produced it.
    ///
    /// Either input may be absent; an absent forecast yields a keep-closed
    /// recommendation with empty metrics rather than an error.
    #[must_use]
    pub fn recommendation(
        &self,
        forecast: Option<&ForecastResponse>,
        air_quality: Option<&AirQualityResponse>,
    ) -> WindowRecommendation {
        let metrics = overnight_metrics(forecast);
        let max_aqi = overnight_max_aqi(air_quality);
        let decision = window_decision(&metrics, max_aqi, &self.thresholds);

        WindowRecommendation {
            decision,
            message: decision.message().to_owned(),
            tonight_low: metrics.low_temperature,
            max_wind: metrics.max_wind,
            mean_humidity: metrics.mean_humidity,
            rain_sum: metrics.rain_sum,
            effective_night_low: effective_night_low(&metrics, &self.thresholds),
            max_european_aqi: max_aqi,
        }
    }

    /// Decision alone, without assembling the full recommendation.
    #[must_use]
    pub fn decision(
        &self,
        forecast: Option<&ForecastResponse>,
        air_quality: Option<&AirQualityResponse>,
    ) -> WindowDecision {
        let metrics = overnight_metrics(forecast);
        window_decision(&metrics, overnight_max_aqi(air_quality), &self.thresholds)
    }

    /// The validated thresholds this engine evaluates with.
    #[must_use]
    pub fn thresholds(&self) -> &VentilationThresholds {
        &self.thresholds
    }
}
