// ABOUTME: Process-environment configuration for the ventilation advisor
// ABOUTME: Handles environment variables, forecast location, and external service endpoints
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Server configuration assembled from process environment variables.
//!
//! Everything the advisor needs at runtime arrives through the environment:
//! the forecast location, the Open-Meteo and Pushover endpoints, and the
//! ventilation thresholds. A `.env` file is honored when one is present.

use crate::config::thresholds::VentilationThresholds;
use crate::constants::env_config;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Log verbosity selected through `LOG_LEVEL`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level name as it appears in `LOG_LEVEL` and in serialized form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Map onto the `tracing` level hierarchy
    #[must_use]
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse a level name, treating anything unrecognized as `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP API binds to
    pub http_port: u16,
    /// Verbosity for the tracing subscriber
    pub log_level: LogLevel,
    /// Forecast location
    pub location: LocationConfig,
    /// Endpoints and credentials for upstream services
    pub external_services: ExternalServicesConfig,
    /// Ventilation decision thresholds
    pub thresholds: VentilationThresholds,
}

/// Location the overnight forecast is fetched for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// IANA timezone name, e.g. `Europe/Berlin`
    pub timezone: String,
}

/// Upstream service endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Open-Meteo weather forecast API configuration
    pub open_meteo: OpenMeteoConfig,
    /// Open-Meteo air quality API configuration
    pub air_quality: AirQualityConfig,
    /// Pushover notification API configuration
    pub pushover: PushoverConfig,
}

/// Open-Meteo forecast API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenMeteoConfig {
    /// Forecast API base URL
    pub base_url: String,
}

/// Open-Meteo air quality API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityConfig {
    /// Air quality API base URL
    pub base_url: String,
    /// Model domain, e.g. `cams_europe`
    pub domain: String,
}

/// Pushover notification API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushoverConfig {
    /// Pushover API base URL
    pub base_url: String,
    /// Application token
    pub token: String,
    /// Recipient user key
    pub user: String,
}

impl ServerConfig {
    /// Assemble the configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error when a required variable is unset, a coordinate does
    /// not parse, or validation rejects the assembled configuration.
    pub fn from_env() -> Result<Self> {
        info!("Loading server configuration from the environment");

        // A missing or broken .env file is not fatal
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file loaded: {e}");
        }

        let config = Self {
            http_port: env_config::http_port(),
            log_level: LogLevel::from_str_or_default(&env_config::log_level()),

            location: LocationConfig {
                latitude: require_coordinate("WEATHER_LATITUDE")?,
                longitude: require_coordinate("WEATHER_LONGITUDE")?,
                timezone: require_env("WEATHER_TIMEZONE")?,
            },

            external_services: ExternalServicesConfig {
                open_meteo: OpenMeteoConfig {
                    base_url: env_var_or("OPEN_METEO_BASE_URL", "https://api.open-meteo.com/v1"),
                },
                air_quality: AirQualityConfig {
                    base_url: env_var_or(
                        "AIR_QUALITY_BASE_URL",
                        "https://air-quality-api.open-meteo.com/v1",
                    ),
                    domain: require_env("AIR_QUALITY_DOMAIN")?,
                },
                pushover: PushoverConfig {
                    base_url: env_var_or("PUSHOVER_BASE_URL", "https://api.pushover.net/1"),
                    token: require_env("PUSHOVER_TOKEN")?,
                    user: require_env("PUSHOVER_USER")?,
                },
            },

            thresholds: VentilationThresholds::from_env()?,
        };

        config.validate()?;
        info!(port = config.http_port, "Configuration loaded");
        Ok(config)
    }

    /// Check ranges and required fields on the assembled configuration
    ///
    /// # Errors
    ///
    /// Returns an error when coordinates fall outside their valid ranges or
    /// the timezone is blank.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(anyhow::anyhow!(
                "WEATHER_LATITUDE must be between -90 and 90"
            ));
        }

        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(anyhow::anyhow!(
                "WEATHER_LONGITUDE must be between -180 and 180"
            ));
        }

        if self.location.timezone.trim().is_empty() {
            return Err(anyhow::anyhow!("WEATHER_TIMEZONE cannot be empty"));
        }

        if self.external_services.pushover.token.trim().is_empty()
            || self.external_services.pushover.user.trim().is_empty()
        {
            warn!("Pushover token or user key is empty; notification delivery will fail");
        }

        // Threshold ordering is validated when the decision engine is built
        Ok(())
    }

    /// One-block configuration summary for startup logging, secrets omitted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nightvent configuration:\n\
             - Listen port: {}\n\
             - Log level: {}\n\
             - Location: {:.4}, {:.4} ({})\n\
             - Forecast API: {}\n\
             - Air quality API: {} (domain {})\n\
             - Pushover: {}\n\
             - Temperature bands: {} / {} / {} / {} / {}",
            self.http_port,
            self.log_level,
            self.location.latitude,
            self.location.longitude,
            self.location.timezone,
            self.external_services.open_meteo.base_url,
            self.external_services.air_quality.base_url,
            self.external_services.air_quality.domain,
            if self.external_services.pushover.token.is_empty()
                || self.external_services.pushover.user.is_empty()
            {
                "credentials missing"
            } else {
                "credentials set"
            },
            self.thresholds.five_minute_vent_max_temp,
            self.thresholds.ten_minute_vent_max_temp,
            self.thresholds.ten_to_fifteen_minute_vent_and_crack_max_temp,
            self.thresholds.crack_overnight_max_temp,
            self.thresholds.open_overnight_max_temp,
        )
    }

    /// Open-Meteo forecast endpoint settings
    #[must_use]
    pub const fn open_meteo_config(&self) -> &OpenMeteoConfig {
        &self.external_services.open_meteo
    }

    /// Air quality endpoint settings
    #[must_use]
    pub const fn air_quality_config(&self) -> &AirQualityConfig {
        &self.external_services.air_quality
    }

    /// Pushover endpoint and credentials
    #[must_use]
    pub const fn pushover_config(&self) -> &PushoverConfig {
        &self.external_services.pushover
    }
}

/// Read an environment variable, substituting a default when it is unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a required environment variable
fn require_env(key: &str) -> Result<String> {
    env::var(key).map_err(|_| anyhow::anyhow!("{key} must be configured"))
}

/// Parse a required coordinate variable as decimal degrees
fn require_coordinate(key: &str) -> Result<f64> {
    require_env(key)?
        .trim()
        .parse()
        .with_context(|| format!("Invalid {key} value"))
}
