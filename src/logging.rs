// ABOUTME: Tracing subscriber assembly for the Nightvent server
// ABOUTME: Resolves LOG_LEVEL and LOG_FORMAT into a filtered, formatted global subscriber
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors

//! Structured logging setup.
//!
//! The subscriber is installed once at startup. `LOG_LEVEL` sets the level
//! for the advisor's own events and `LOG_FORMAT` picks the line format;
//! when `RUST_LOG` is set its directives take over as the base filter.
//! Either way the noise rules below keep HTTP client and server internals
//! from drowning out the nightly decision trail.

use crate::config::environment::LogLevel;
use crate::constants::{env_config, service_names};
use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directives applied on top of the base filter. HTTP plumbing stays
/// at warn; request traces from the middleware stay visible at info.
const NOISE_DIRECTIVES: [&str; 3] = ["hyper=warn", "reqwest=warn", "tower_http=info"];

/// Line format for emitted log events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers
    Json,
    /// Multi-line human-readable output for development
    Pretty,
    /// Single-line output for space-constrained environments
    Compact,
}

impl LogFormat {
    fn from_env() -> Self {
        match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => Self::Json,
            Ok("compact") => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Subscriber settings resolved from the environment
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level directive for the advisor's own events
    pub level: LogLevel,
    /// Line format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Resolve settings from `LOG_LEVEL` and `LOG_FORMAT`.
    ///
    /// Unknown values fall back to info / pretty rather than failing; a
    /// misspelled level should never take the nightly run down.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: LogLevel::from_str_or_default(&env_config::log_level()),
            format: LogFormat::from_env(),
        }
    }

    /// Install the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error when a filter directive does not parse or another
    /// subscriber was installed first.
    pub fn init(&self) -> Result<()> {
        let filter = self.build_filter()?;
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => registry
                .with(fmt::layer().with_writer(io::stdout).json())
                .try_init(),
            LogFormat::Pretty => registry.with(fmt::layer().with_writer(io::stdout)).try_init(),
            LogFormat::Compact => {
                let layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stdout);
                registry.with(layer).try_init()
            }
        }
        .context("Failed to install the tracing subscriber")?;

        info!(
            service = service_names::NIGHTVENT_SERVER,
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }

    /// Base filter from `RUST_LOG` (when set) or the configured level, with
    /// the noise directives and the advisor's own level stacked on top.
    fn build_filter(&self) -> Result<EnvFilter> {
        let tracing_level = self.level.to_tracing_level();
        let mut filter = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(tracing_level.to_string()),
            EnvFilter::new,
        );

        for directive in NOISE_DIRECTIVES {
            filter = filter.add_directive(
                directive
                    .parse()
                    .with_context(|| format!("Invalid log directive: {directive}"))?,
            );
        }
        filter = filter.add_directive(
            format!("nightvent={}", self.level)
                .parse()
                .context("Invalid log level for the nightvent directive")?,
        );

        Ok(filter)
    }
}

/// Install the subscriber configured by the environment.
///
/// # Errors
///
/// Returns an error when subscriber installation fails.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
