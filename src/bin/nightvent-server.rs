// ABOUTME: Server binary for the Nightvent overnight window ventilation advisor
// ABOUTME: Serves the HTTP API or runs a single evaluate-and-notify pass with --once
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Nightvent Server Binary
//!
//! This binary starts the Nightvent HTTP API, or with `--once` performs a
//! single nightly evaluation: fetch tonight's forecast and air quality,
//! decide, and deliver the recommendation through Pushover. Scheduling the
//! nightly run is left to an external scheduler such as cron or a systemd
//! timer.

use anyhow::Result;
use clap::Parser;
use nightvent::{
    config::environment::ServerConfig,
    logging,
    server::{NightventServer, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "nightvent-server")]
#[command(about = "Nightvent - overnight window ventilation advisor")]
pub struct Args {
    /// Listen on this port instead of the configured one
    #[arg(long)]
    http_port: Option<u16>,

    /// Evaluate tonight once, send the notification, and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle container environments where clap may not work properly
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument parsing failed: {e}");
            eprintln!("Using default configuration for serve mode");
            Args {
                http_port: None,
                once: false,
            }
        }
    };

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Nightvent - overnight window ventilation advisor");
    info!("{}", config.summary());

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::from_config(Arc::new(config))?);

    if args.once {
        if let Err(e) = run_once(&resources).await {
            error!("One-shot nightly run failed: {e}");
            return Err(e);
        }
        return Ok(());
    }

    info!("Server starting on port {http_port} (HTTP)");
    display_available_endpoints(http_port);
    info!("Ready to advise on tonight's windows!");

    let server = NightventServer::new(resources);
    if let Err(e) = server.run(http_port).await {
        error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Evaluate tonight once, deliver the rendered message, and exit.
///
/// The forecast fetch is fatal; a failed air-quality fetch only degrades the
/// decision. A failed delivery makes the run exit non-zero so the scheduler
/// notices.
async fn run_once(resources: &ServerResources) -> Result<()> {
    info!("Running one-shot nightly evaluation");

    let recommendation = resources.nightly_recommendation().await?;
    info!(
        decision = %recommendation.decision,
        tonight_low = ?recommendation.tonight_low,
        effective_night_low = ?recommendation.effective_night_low,
        max_wind = ?recommendation.max_wind,
        mean_humidity = ?recommendation.mean_humidity,
        rain_sum = ?recommendation.rain_sum,
        max_european_aqi = ?recommendation.max_european_aqi,
        "Tonight: {}",
        recommendation.message
    );

    let receipt = resources.notifier.notify(&recommendation.message).await?;
    info!(request = ?receipt.request, "Window recommendation sent successfully");

    Ok(())
}

/// Display all available API endpoints with their port
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("Recommendation:");
    info!("   Tonight's Advice:   GET  http://{host}:{port}/windows");
    info!("   Notification Relay: POST http://{host}:{port}/windows");
    info!("Monitoring:");
    info!("   Health Check:       GET  http://{host}:{port}/health");
    info!("   Readiness:          GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
