// ABOUTME: Nightly ventilation decision: effective-low adjustment, temperature bands, and overrides
// ABOUTME: Maps overnight metrics plus air quality onto one of the seven window actions

//! Ventilation Decision Logic
//!
//! Precedence, evaluated top to bottom:
//!
//! 1. No effective night low (the night had no temperature) → keep closed
//! 2. Heavy overnight rain → keep closed
//! 3. Temperature band on the adjusted low, inclusive upper bounds
//! 4. Light rain or poor air quality downgrades any band that would leave the
//!    windows open overnight to a ten-minute vent before bed
//!
//! The effective night low is tonight's minimum temperature, cooled when the
//! night is windy and warmed when it is humid: strong wind makes a night feel
//! colder through an open window, and humid air limits how much cooling
//! ventilation can deliver.

use crate::config::thresholds::VentilationThresholds;
use crate::engine::overnight::OvernightMetrics;
use crate::models::WindowDecision;

/// Tonight's minimum temperature adjusted for wind and humidity.
///
/// `None` when the window produced no temperature samples; wind and humidity
/// on their own never fabricate a low.
#[must_use]
pub fn effective_night_low(
    metrics: &OvernightMetrics,
    thresholds: &VentilationThresholds,
) -> Option<f64> {
    let mut effective = metrics.low_temperature?;

    if metrics
        .max_wind
        .is_some_and(|wind| wind >= thresholds.strong_wind_threshold)
    {
        effective -= thresholds.strong_wind_cooling_adjustment;
    }

    if metrics
        .mean_humidity
        .is_some_and(|humidity| humidity >= thresholds.high_humidity_threshold)
    {
        effective += thresholds.high_humidity_warming_adjustment;
    }

    Some(effective)
}

/// Resolve tonight's window action from aggregated metrics and air quality.
#[must_use]
pub fn window_decision(
    metrics: &OvernightMetrics,
    max_european_aqi: Option<f64>,
    thresholds: &VentilationThresholds,
) -> WindowDecision {
    let Some(effective_low) = effective_night_low(metrics, thresholds) else {
        return WindowDecision::KeepClosed;
    };

    if metrics
        .rain_sum
        .is_some_and(|rain| rain >= thresholds.heavy_rain_threshold)
    {
        return WindowDecision::KeepClosed;
    }

    let band = temperature_band_decision(effective_low, thresholds);

    let light_rain = metrics
        .rain_sum
        .is_some_and(|rain| rain >= thresholds.light_rain_threshold);
    let poor_air = max_european_aqi.is_some_and(|aqi| aqi > thresholds.poor_air_quality_threshold);
    if (light_rain || poor_air) && band.opens_overnight() {
        return WindowDecision::OpenTenMinutesThenClose;
    }

    band
}

/// Map an effective night low onto its temperature band.
///
/// Band upper bounds are inclusive: an effective low exactly on a bound takes
/// the colder band's action.
#[must_use]
pub fn temperature_band_decision(
    effective_low: f64,
    thresholds: &VentilationThresholds,
) -> WindowDecision {
    if effective_low <= thresholds.five_minute_vent_max_temp {
        WindowDecision::OpenFiveMinutesThenClose
    } else if effective_low <= thresholds.ten_minute_vent_max_temp {
        WindowDecision::OpenTenMinutesThenClose
    } else if effective_low <= thresholds.ten_to_fifteen_minute_vent_and_crack_max_temp {
        WindowDecision::OpenTenToFifteenMinutesThenCrackOneCm
    } else if effective_low <= thresholds.crack_overnight_max_temp {
        WindowDecision::CrackOneToThreeCmOvernight
    } else if effective_low <= thresholds.open_overnight_max_temp {
        WindowDecision::OpenOvernight
    } else {
        WindowDecision::OpenWideOvernight
    }
}
