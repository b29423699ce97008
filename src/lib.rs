// ABOUTME: Main library entry point for the Nightvent ventilation advisor
// ABOUTME: Provides the decision engine, forecast providers, notifier and HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

#![deny(unsafe_code)]

//! # Nightvent
//!
//! An overnight window ventilation advisor. Nightvent reads tonight's hourly
//! weather forecast and air quality, reduces them to the overnight window
//! (22:00 through 08:00), and decides how far the bedroom windows should be
//! opened, from keeping them closed through opening them wide. The rendered
//! advice is then pushed to your phone.
//!
//! ## What it does
//!
//! - **Overnight aggregation**: tonight's low, peak wind, mean humidity and
//!   rain sum over the bedtime-to-wake window
//! - **Adjusted night low**: strong wind cools and high humidity warms the
//!   forecast low before it is banded
//! - **Seven-step decision**: graded ventilation actions with rain and
//!   air-quality overrides
//! - **Open-Meteo providers**: forecast and air-quality clients with no API key
//! - **Pushover delivery**: the rendered recommendation lands on your phone
//! - **HTTP API**: the same evaluation behind `GET /windows`
//!
//! ## Running it
//!
//! 1. Configure `WEATHER_LATITUDE`, `WEATHER_LONGITUDE`, `WEATHER_TIMEZONE`,
//!    `AIR_QUALITY_DOMAIN`, `PUSHOVER_TOKEN` and `PUSHOVER_USER`
//! 2. Run `nightvent-server --once` from a nightly scheduler, or plain
//!    `nightvent-server` for the HTTP API
//!
//! ## Crate layout
//!
//! - **Engine**: pure decision logic over aggregated overnight metrics
//! - **Providers**: Open-Meteo forecast and air-quality clients
//! - **Notifications**: Pushover delivery behind a notifier seam
//! - **Routes**: axum handlers delegating to shared server resources
//! - **Config**: environment-driven configuration with fail-fast validation
//!
//! ## Library use
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use nightvent::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("advising for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management: environment loading and ventilation thresholds
pub mod config;

/// Application constants and environment-backed defaults
pub mod constants;

/// Overnight aggregation and the window decision engine
pub mod engine;

/// Error codes, `AppError` and the JSON error envelope
pub mod errors;

/// Tracing subscriber setup driven by `LOG_LEVEL` and `LOG_FORMAT`
pub mod logging;

/// Common data models: forecast series, decisions and recommendations
pub mod models;

/// Notification delivery through Pushover
pub mod notifications;

/// Weather and air-quality provider implementations
pub mod providers;

/// HTTP routes for recommendations and probes
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;

/// Shared helpers, currently the upstream HTTP client
pub mod utils;
