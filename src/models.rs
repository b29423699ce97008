// ABOUTME: Core data models and types for the Nightvent ventilation advisor
// ABOUTME: Defines forecast series, air-quality series, WindowDecision and WindowRecommendation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! # Wire and Decision Models
//!
//! The hourly series types mirror the Open-Meteo wire format so that provider payloads
//! deserialize directly into engine input; the recommendation types are the engine's
//! output surface.
//!
//! ## Conventions
//!
//! - **Absence is data**: every hourly value is optional. Providers may omit whole
//!   sequences, truncate them, or null out individual samples, and all of those are
//!   normal "no value" outcomes rather than errors
//! - **Index alignment**: `time[i]` corresponds to `temperature_2m[i]`, `rain[i]`, etc.;
//!   sequences shorter than `time` simply yield no value at the missing indices
//! - **Serializable**: all models support JSON serialization for the HTTP API

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hourly weather forecast response for a fixed location.
///
/// Matches the Open-Meteo `/v1/forecast` payload shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Latitude the forecast was resolved for
    #[serde(default)]
    pub latitude: f64,
    /// Longitude the forecast was resolved for
    #[serde(default)]
    pub longitude: f64,
    /// Hourly series block; absent when the provider returned no hourly data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlyForecast>,
}

/// Index-aligned hourly forecast sequences.
///
/// `time` entries are naive local wall-clock stamps in the configured timezone
/// (`YYYY-MM-DDTHH:MM`); value sequences may be absent, shorter than `time`, or
/// contain nulls for individual hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local timestamps, one per hour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<Option<String>>>,
    /// Air temperature at 2m, degrees Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_2m: Option<Vec<Option<f64>>>,
    /// Wind speed at 10m, km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    /// Relative humidity at 2m, percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_humidity_2m: Option<Vec<Option<f64>>>,
    /// Rain amount, millimetres per hour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<Vec<Option<f64>>>,
}

/// Hourly air-quality response for a fixed location.
///
/// Matches the Open-Meteo `/v1/air-quality` payload shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirQualityResponse {
    /// Latitude the series was resolved for
    #[serde(default)]
    pub latitude: f64,
    /// Longitude the series was resolved for
    #[serde(default)]
    pub longitude: f64,
    /// Hourly series block; absent when the provider returned no hourly data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly: Option<HourlyAirQuality>,
}

/// Index-aligned hourly air-quality sequences, same alignment contract as
/// [`HourlyForecast`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyAirQuality {
    /// Local timestamps, one per hour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<Vec<Option<String>>>,
    /// European air quality index, dimensionless
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub european_aqi: Option<Vec<Option<f64>>>,
}

/// The seven ventilation actions, ordered from least to most ventilation.
///
/// The derived `Ord` follows declaration order, so comparisons express
/// "openness": `KeepClosed < OpenFiveMinutesThenClose < ... < OpenWideOvernight`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowDecision {
    /// Do not open the windows at all tonight
    KeepClosed,
    /// Brief five-minute vent before bed, closed overnight
    OpenFiveMinutesThenClose,
    /// Ten-minute vent before bed, closed overnight
    OpenTenMinutesThenClose,
    /// Ten to fifteen minute vent, then a 1cm crack overnight
    OpenTenToFifteenMinutesThenCrackOneCm,
    /// Leave a 1-3cm crack overnight
    CrackOneToThreeCmOvernight,
    /// Leave the windows open overnight
    OpenOvernight,
    /// Open the windows wide overnight
    OpenWideOvernight,
}

impl WindowDecision {
    /// The fixed human-readable sentence for this decision.
    ///
    /// Total over the enumeration; the wording is part of the notification
    /// contract and must not drift.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OpenFiveMinutesThenClose => {
                "Open the windows for 5 minutes before bed, then close them fully overnight"
            }
            Self::OpenTenMinutesThenClose => {
                "Open the windows for 10 minutes before bed, then close them overnight"
            }
            Self::OpenTenToFifteenMinutesThenCrackOneCm => {
                "Open the windows for 10-15 minutes before bed, then leave them slightly cracked (1cm) overnight"
            }
            Self::CrackOneToThreeCmOvernight => "Leave the windows cracked (1-3cm) overnight",
            Self::OpenOvernight => "Leave the windows open overnight",
            Self::OpenWideOvernight => "Open the windows wide overnight",
            Self::KeepClosed => "Keep the windows closed tonight",
        }
    }

    /// Whether this action leaves the windows at least cracked for the whole night.
    #[must_use]
    pub const fn opens_overnight(self) -> bool {
        matches!(
            self,
            Self::OpenTenToFifteenMinutesThenCrackOneCm
                | Self::CrackOneToThreeCmOvernight
                | Self::OpenOvernight
                | Self::OpenWideOvernight
        )
    }
}

impl fmt::Display for WindowDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KeepClosed => "KEEP_CLOSED",
            Self::OpenFiveMinutesThenClose => "OPEN_FIVE_MINUTES_THEN_CLOSE",
            Self::OpenTenMinutesThenClose => "OPEN_TEN_MINUTES_THEN_CLOSE",
            Self::OpenTenToFifteenMinutesThenCrackOneCm => {
                "OPEN_TEN_TO_FIFTEEN_MINUTES_THEN_CRACK_ONE_CM"
            }
            Self::CrackOneToThreeCmOvernight => "CRACK_ONE_TO_THREE_CM_OVERNIGHT",
            Self::OpenOvernight => "OPEN_OVERNIGHT",
            Self::OpenWideOvernight => "OPEN_WIDE_OVERNIGHT",
        };
        f.write_str(name)
    }
}

/// Full nightly recommendation: the decision, its rendered message, and the
/// derived metrics that produced it, kept for observability.
///
/// Metric fields are `None` when no in-window samples existed for that field;
/// they serialize as explicit JSON nulls so consumers can distinguish "absent"
/// from zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecommendation {
    /// The ventilation action to take tonight
    pub decision: WindowDecision,
    /// Human-readable rendering of the decision
    pub message: String,
    /// Minimum overnight temperature, °C
    pub tonight_low: Option<f64>,
    /// Maximum overnight wind speed, km/h
    pub max_wind: Option<f64>,
    /// Mean overnight relative humidity, percent
    pub mean_humidity: Option<f64>,
    /// Total overnight rain, mm; `None` when no rain samples were observed
    pub rain_sum: Option<f64>,
    /// Tonight's low after wind and humidity adjustments, °C
    pub effective_night_low: Option<f64>,
    /// Worst in-window European AQI sample
    pub max_european_aqi: Option<f64>,
}
