// ABOUTME: Ventilation threshold configuration for the nightly window decision
// ABOUTME: Twelve tunable parameters covering temperature bands, wind, humidity, rain and air quality
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Ventilation Threshold Configuration
//!
//! The decision engine is driven entirely by this record: five ascending
//! temperature-band upper bounds, the wind and humidity adjustments applied to
//! tonight's low, and the rain / air-quality override cutoffs. Values are
//! caller-supplied (environment variables with documented defaults) and
//! validated once, at engine construction.

use crate::errors::{AppError, AppResult};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Tunable thresholds for the nightly window-ventilation decision.
///
/// Temperatures are °C, wind is km/h, humidity is percent, rain is mm summed
/// over the overnight window, and air quality is the European AQI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentilationThresholds {
    /// Upper bound (inclusive) of the five-minute vent band
    pub five_minute_vent_max_temp: f64,
    /// Upper bound (inclusive) of the ten-minute vent band
    pub ten_minute_vent_max_temp: f64,
    /// Upper bound (inclusive) of the vent-then-crack band
    pub ten_to_fifteen_minute_vent_and_crack_max_temp: f64,
    /// Upper bound (inclusive) of the crack-overnight band
    pub crack_overnight_max_temp: f64,
    /// Upper bound (inclusive) of the open-overnight band; above it, open wide
    pub open_overnight_max_temp: f64,
    /// Wind speed at or above which the cooling adjustment applies
    pub strong_wind_threshold: f64,
    /// Degrees subtracted from tonight's low under strong wind
    pub strong_wind_cooling_adjustment: f64,
    /// Mean humidity at or above which the warming adjustment applies
    pub high_humidity_threshold: f64,
    /// Degrees added to tonight's low under high humidity
    pub high_humidity_warming_adjustment: f64,
    /// Overnight rain sum at or above which overnight opening is downgraded
    pub light_rain_threshold: f64,
    /// Overnight rain sum at or above which the windows stay closed
    pub heavy_rain_threshold: f64,
    /// European AQI above which overnight opening is downgraded
    pub poor_air_quality_threshold: f64,
}

impl Default for VentilationThresholds {
    fn default() -> Self {
        Self {
            five_minute_vent_max_temp: 3.0,
            ten_minute_vent_max_temp: 7.0,
            ten_to_fifteen_minute_vent_and_crack_max_temp: 11.0,
            crack_overnight_max_temp: 15.0,
            open_overnight_max_temp: 18.0,
            strong_wind_threshold: 20.0,
            strong_wind_cooling_adjustment: 2.0,
            high_humidity_threshold: 80.0,
            high_humidity_warming_adjustment: 1.0,
            light_rain_threshold: 0.5,
            heavy_rain_threshold: 3.0,
            poor_air_quality_threshold: 60.0,
        }
    }
}

impl VentilationThresholds {
    /// Load thresholds from `WINDOW_*` environment variables, falling back to
    /// the documented defaults for any variable that is unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable does not parse as a number. Ordering
    /// is not checked here; that happens once, at engine construction.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            five_minute_vent_max_temp: env_threshold(
                "WINDOW_FIVE_MINUTE_VENT_MAX_TEMP",
                defaults.five_minute_vent_max_temp,
            )?,
            ten_minute_vent_max_temp: env_threshold(
                "WINDOW_TEN_MINUTE_VENT_MAX_TEMP",
                defaults.ten_minute_vent_max_temp,
            )?,
            ten_to_fifteen_minute_vent_and_crack_max_temp: env_threshold(
                "WINDOW_TEN_TO_FIFTEEN_MINUTE_VENT_AND_CRACK_MAX_TEMP",
                defaults.ten_to_fifteen_minute_vent_and_crack_max_temp,
            )?,
            crack_overnight_max_temp: env_threshold(
                "WINDOW_CRACK_OVERNIGHT_MAX_TEMP",
                defaults.crack_overnight_max_temp,
            )?,
            open_overnight_max_temp: env_threshold(
                "WINDOW_OPEN_OVERNIGHT_MAX_TEMP",
                defaults.open_overnight_max_temp,
            )?,
            strong_wind_threshold: env_threshold(
                "WINDOW_STRONG_WIND_THRESHOLD",
                defaults.strong_wind_threshold,
            )?,
            strong_wind_cooling_adjustment: env_threshold(
                "WINDOW_STRONG_WIND_COOLING_ADJUSTMENT",
                defaults.strong_wind_cooling_adjustment,
            )?,
            high_humidity_threshold: env_threshold(
                "WINDOW_HIGH_HUMIDITY_THRESHOLD",
                defaults.high_humidity_threshold,
            )?,
            high_humidity_warming_adjustment: env_threshold(
                "WINDOW_HIGH_HUMIDITY_WARMING_ADJUSTMENT",
                defaults.high_humidity_warming_adjustment,
            )?,
            light_rain_threshold: env_threshold(
                "WINDOW_LIGHT_RAIN_THRESHOLD",
                defaults.light_rain_threshold,
            )?,
            heavy_rain_threshold: env_threshold(
                "WINDOW_HEAVY_RAIN_THRESHOLD",
                defaults.heavy_rain_threshold,
            )?,
            poor_air_quality_threshold: env_threshold(
                "WINDOW_POOR_AIR_QUALITY_THRESHOLD",
                defaults.poor_air_quality_threshold,
            )?,
        })
    }

    /// Check the ascending-order invariant on the five temperature bands.
    ///
    /// Equal adjacent bounds are permitted (the band collapses to empty);
    /// a descending pair is a fatal configuration error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the bands are not ordered ascending.
    pub fn validate(&self) -> AppResult<()> {
        let bands = [
            self.five_minute_vent_max_temp,
            self.ten_minute_vent_max_temp,
            self.ten_to_fifteen_minute_vent_and_crack_max_temp,
            self.crack_overnight_max_temp,
            self.open_overnight_max_temp,
        ];

        if bands.windows(2).all(|pair| pair[0] <= pair[1]) {
            Ok(())
        } else {
            Err(AppError::config_invalid(
                "window temperature thresholds must be ordered ascending",
            )
            .with_details(serde_json::json!({
                "five_minute_vent_max_temp": self.five_minute_vent_max_temp,
                "ten_minute_vent_max_temp": self.ten_minute_vent_max_temp,
                "ten_to_fifteen_minute_vent_and_crack_max_temp":
                    self.ten_to_fifteen_minute_vent_and_crack_max_temp,
                "crack_overnight_max_temp": self.crack_overnight_max_temp,
                "open_overnight_max_temp": self.open_overnight_max_temp,
            })))
        }
    }
}

/// Read one threshold from the environment, falling back to its default.
fn env_threshold(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}")),
        Err(_) => Ok(default),
    }
}
