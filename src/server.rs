// ABOUTME: HTTP server assembly and shared resource management for the Nightvent advisor
// ABOUTME: Wires engine, providers and notifier into an axum router and serves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Server assembly
//!
//! [`ServerResources`] gathers every shared dependency (engine, providers,
//! notifier, configuration) behind `Arc` so route handlers clone pointers
//! rather than resources. [`NightventServer`] assembles the router from the
//! domain route modules and runs it until shutdown.

use crate::config::environment::ServerConfig;
use crate::engine::VentilationEngine;
use crate::errors::AppResult;
use crate::models::WindowRecommendation;
use crate::notifications::{Notifier, PushoverClient, PushoverClientConfig};
use crate::providers::{
    AirQualityProvider, ForecastProvider, OpenMeteoClient, OpenMeteoClientConfig,
};
use crate::routes::{HealthRoutes, WindowRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared server dependencies with centralized resource management
pub struct ServerResources {
    /// Validated decision engine
    pub engine: VentilationEngine,
    /// Weather forecast source
    pub forecast_provider: Arc<dyn ForecastProvider>,
    /// Air quality source
    pub air_quality_provider: Arc<dyn AirQualityProvider>,
    /// Notification sink
    pub notifier: Arc<dyn Notifier>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources from explicit parts.
    ///
    /// Tests wire mock providers and notifiers through here.
    #[must_use]
    pub fn new(
        engine: VentilationEngine,
        forecast_provider: Arc<dyn ForecastProvider>,
        air_quality_provider: Arc<dyn AirQualityProvider>,
        notifier: Arc<dyn Notifier>,
        config: Arc<ServerConfig>,
    ) -> Self {
        Self {
            engine,
            forecast_provider,
            air_quality_provider,
            notifier,
            config,
        }
    }

    /// Create resources with the production Open-Meteo and Pushover clients.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the configured thresholds fail validation.
    pub fn from_config(config: Arc<ServerConfig>) -> AppResult<Self> {
        let engine = VentilationEngine::new(config.thresholds.clone())?;

        let open_meteo = Arc::new(OpenMeteoClient::new(OpenMeteoClientConfig {
            forecast_base_url: config.open_meteo_config().base_url.clone(),
            air_quality_base_url: config.air_quality_config().base_url.clone(),
            air_quality_domain: config.air_quality_config().domain.clone(),
            ..OpenMeteoClientConfig::default()
        }));

        let notifier = Arc::new(PushoverClient::new(PushoverClientConfig {
            base_url: config.pushover_config().base_url.clone(),
            token: config.pushover_config().token.clone(),
            user: config.pushover_config().user.clone(),
            ..PushoverClientConfig::default()
        }));

        Ok(Self {
            engine,
            forecast_provider: open_meteo.clone(),
            air_quality_provider: open_meteo,
            notifier,
            config,
        })
    }

    /// Fetch tonight's inputs and evaluate them into a recommendation.
    ///
    /// The forecast is required and its failure propagates. Air quality is
    /// best-effort: a failed fetch logs a warning and the decision falls back
    /// to weather data alone.
    ///
    /// # Errors
    ///
    /// Returns the forecast provider's error when the forecast fetch fails.
    pub async fn nightly_recommendation(&self) -> AppResult<WindowRecommendation> {
        let location = &self.config.location;
        let forecast = self.forecast_provider.fetch_forecast(location).await?;

        let air_quality = match self.air_quality_provider.fetch_air_quality(location).await {
            Ok(response) => Some(response),
            Err(error) => {
                warn!("Air quality unavailable, deciding on weather alone: {error}");
                None
            }
        };

        Ok(self
            .engine
            .recommendation(Some(&forecast), air_quality.as_ref()))
    }
}

/// Nightvent HTTP server
#[derive(Clone)]
pub struct NightventServer {
    resources: Arc<ServerResources>,
}

impl NightventServer {
    /// Create a new server with centralized resource management
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router
    pub fn router(&self) -> Router {
        Router::new()
            .merge(HealthRoutes::routes())
            .merge(WindowRoutes::routes(self.resources.clone()))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the HTTP server until shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind or serve on `port`.
    pub async fn run(self, port: u16) -> Result<()> {
        let app = self.router();

        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!("HTTP server listening on http://{addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated abnormally")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(error) => warn!("Failed to listen for shutdown signal: {error}"),
    }
}
