// ABOUTME: Overnight window extraction and per-field aggregation over hourly forecast series
// ABOUTME: Finds the first 22:00 anchor, bounds the night at 08:00, and folds min/max/mean/sum metrics

//! Overnight Window Aggregation
//!
//! The night runs from the first hourly sample stamped 22:00 local time through
//! 08:00 on the following calendar day, inclusive at both ends. Every metric is
//! folded independently over the samples inside that window: a null temperature
//! at one hour does not discard that hour's wind or rain reading.
//!
//! Timestamps are naive local wall-clock stamps (`YYYY-MM-DDTHH:MM`, seconds
//! tolerated). Unparseable or blank stamps are skipped, never fatal.

use crate::models::{AirQualityResponse, ForecastResponse};
use chrono::{NaiveDateTime, Timelike};

/// Local hour that anchors the start of the overnight window
pub const BEDTIME_HOUR: u32 = 22;
/// Local hour on the following day that closes the overnight window
pub const WAKE_HOUR: u32 = 8;

/// Aggregated weather metrics for one overnight window.
///
/// Each field is `None` when no usable sample for that field fell inside the
/// window. `rain_sum` distinguishes "no rain samples" (`None`) from "samples
/// present, zero rain" (`Some(0.0)`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OvernightMetrics {
    /// Minimum temperature over the window, °C
    pub low_temperature: Option<f64>,
    /// Maximum wind speed over the window, km/h
    pub max_wind: Option<f64>,
    /// Mean relative humidity over the window, percent
    pub mean_humidity: Option<f64>,
    /// Total rain over the window, mm
    pub rain_sum: Option<f64>,
}

/// Aggregate tonight's window metrics from an hourly forecast.
///
/// Returns empty metrics when the forecast is absent, carries no hourly block,
/// has no timestamps, has no temperature series at all, or contains no 22:00
/// anchor. A forecast that cannot state tonight's temperature cannot describe
/// the night, so every metric stays empty in that case.
#[must_use]
pub fn overnight_metrics(forecast: Option<&ForecastResponse>) -> OvernightMetrics {
    let Some(hourly) = forecast.and_then(|f| f.hourly.as_ref()) else {
        return OvernightMetrics::default();
    };
    let Some(times) = hourly.time.as_deref() else {
        return OvernightMetrics::default();
    };
    if !hourly.temperature_2m.as_ref().is_some_and(|t| !t.is_empty()) {
        return OvernightMetrics::default();
    }
    let Some((window_start, window_end)) = overnight_window(times) else {
        return OvernightMetrics::default();
    };

    let mut metrics = OvernightMetrics::default();
    let mut humidity_sum = 0.0;
    let mut humidity_count = 0_u32;
    let mut rain_sum = 0.0;
    let mut rain_count = 0_u32;

    for (index, slot) in times.iter().enumerate() {
        let Some(timestamp) = slot.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        if timestamp < window_start || timestamp > window_end {
            continue;
        }

        if let Some(temperature) = value_at(hourly.temperature_2m.as_deref(), index) {
            metrics.low_temperature =
                Some(metrics.low_temperature.map_or(temperature, |low| low.min(temperature)));
        }
        if let Some(wind) = value_at(hourly.wind_speed_10m.as_deref(), index) {
            metrics.max_wind = Some(metrics.max_wind.map_or(wind, |max| max.max(wind)));
        }
        if let Some(humidity) = value_at(hourly.relative_humidity_2m.as_deref(), index) {
            humidity_sum += humidity;
            humidity_count += 1;
        }
        if let Some(rain) = value_at(hourly.rain.as_deref(), index) {
            rain_sum += rain;
            rain_count += 1;
        }
    }

    metrics.mean_humidity = (humidity_count > 0).then(|| humidity_sum / f64::from(humidity_count));
    metrics.rain_sum = (rain_count > 0).then_some(rain_sum);
    metrics
}

/// Maximum European AQI inside tonight's window of an air-quality series.
///
/// The window is anchored on the air-quality series' own timestamps with the
/// same 22:00-to-08:00 rule. `None` when the series is absent, has no anchor,
/// or holds no AQI samples inside the window.
#[must_use]
pub fn overnight_max_aqi(air_quality: Option<&AirQualityResponse>) -> Option<f64> {
    let hourly = air_quality.and_then(|aq| aq.hourly.as_ref())?;
    let times = hourly.time.as_deref()?;
    let (window_start, window_end) = overnight_window(times)?;

    let mut max_aqi: Option<f64> = None;
    for (index, slot) in times.iter().enumerate() {
        let Some(timestamp) = slot.as_deref().and_then(parse_timestamp) else {
            continue;
        };
        if timestamp < window_start || timestamp > window_end {
            continue;
        }
        if let Some(aqi) = value_at(hourly.european_aqi.as_deref(), index) {
            max_aqi = Some(max_aqi.map_or(aqi, |max| max.max(aqi)));
        }
    }
    max_aqi
}

/// Locate tonight's window: first 22:00 stamp through next-day 08:00, inclusive.
fn overnight_window(times: &[Option<String>]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = times
        .iter()
        .filter_map(|slot| slot.as_deref().and_then(parse_timestamp))
        .find(|timestamp| timestamp.hour() == BEDTIME_HOUR)?;
    let end = start.date().succ_opt()?.and_hms_opt(WAKE_HOUR, 0, 0)?;
    Some((start, end))
}

/// Parse one hourly stamp, tolerating a seconds suffix. Blank or malformed
/// stamps yield `None`.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Sample a value series at one index; short series and nulls both yield `None`.
fn value_at(series: Option<&[Option<f64>]>, index: usize) -> Option<f64> {
    series.and_then(|values| values.get(index).copied().flatten())
}
