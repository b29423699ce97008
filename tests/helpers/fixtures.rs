// ABOUTME: Canned Open-Meteo payload builders for integration tests
// ABOUTME: Produces realistic overnight forecast and air-quality JSON fixtures

use nightvent::models::{AirQualityResponse, ForecastResponse};
use serde_json::{json, Value};

/// Hourly stamps from the evening of 2025-03-01 through the next late morning.
///
/// Eighteen samples, 18:00 through 11:00. Indices 4 through 14 (22:00 through
/// 08:00 inclusive) fall inside the overnight window.
pub fn night_stamps() -> Vec<String> {
    let mut stamps: Vec<String> = (18..24)
        .map(|hour| format!("2025-03-01T{hour:02}:00"))
        .collect();
    stamps.extend((0..12).map(|hour| format!("2025-03-02T{hour:02}:00")));
    stamps
}

/// Cooling curve bottoming out at exactly `low` at 05:00, recovering through
/// late morning. The in-window minimum equals `low`.
pub fn temperature_curve(low: f64) -> Vec<f64> {
    [
        6.0, 5.0, 4.2, 3.5, 2.8, 2.2, 1.7, 1.2, 0.8, 0.5, 0.2, 0.0, 0.5, 1.0, 1.8, 2.8, 4.0, 5.2,
    ]
    .into_iter()
    .map(|offset| low + offset)
    .collect()
}

/// Constant series across the whole forecast horizon
pub fn constant(value: f64) -> Vec<f64> {
    vec![value; night_stamps().len()]
}

/// Dry night except a single rain burst of `total` mm at 01:00
pub fn rain_burst(total: f64) -> Vec<f64> {
    let mut rain = vec![0.0; night_stamps().len()];
    rain[7] = total;
    rain
}

/// European AQI curve peaking at exactly `peak` at 03:00
pub fn aqi_curve(peak: f64) -> Vec<f64> {
    [
        -35.0, -32.0, -30.0, -28.0, -26.0, -22.0, -18.0, -12.0, -6.0, 0.0, -4.0, -9.0, -14.0,
        -18.0, -22.0, -26.0, -30.0, -33.0,
    ]
    .into_iter()
    .map(|offset| peak + offset)
    .collect()
}

/// Forecast payload in the Open-Meteo wire shape
pub fn forecast_payload(
    temperature: &[f64],
    wind: &[f64],
    humidity: &[f64],
    rain: &[f64],
) -> Value {
    json!({
        "latitude": 52.52,
        "longitude": 13.405,
        "hourly": {
            "time": night_stamps(),
            "temperature_2m": temperature,
            "wind_speed_10m": wind,
            "relative_humidity_2m": humidity,
            "rain": rain,
        }
    })
}

/// Air-quality payload in the Open-Meteo wire shape
pub fn air_quality_payload(european_aqi: &[f64]) -> Value {
    json!({
        "latitude": 52.52,
        "longitude": 13.405,
        "hourly": {
            "time": night_stamps(),
            "european_aqi": european_aqi,
        }
    })
}

/// Parse a forecast payload into the typed response
pub fn forecast_from(payload: Value) -> ForecastResponse {
    serde_json::from_value(payload).unwrap()
}

/// Parse an air-quality payload into the typed response
pub fn air_quality_from(payload: Value) -> AirQualityResponse {
    serde_json::from_value(payload).unwrap()
}

/// A calm, dry night bottoming out at `low`: light wind, moderate humidity,
/// no rain
pub fn calm_night(low: f64) -> ForecastResponse {
    forecast_from(forecast_payload(
        &temperature_curve(low),
        &constant(8.0),
        &constant(60.0),
        &constant(0.0),
    ))
}
