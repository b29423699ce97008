// ABOUTME: Liveness and readiness endpoints for deployment probes
// ABOUTME: Reports service identity and version for monitoring infrastructure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Probe routes for deployments and uptime monitoring.
//!
//! The advisor holds no database or background workers, so readiness reduces
//! to process liveness. `/health` additionally reports the service name and
//! version for fleet inventory.

use axum::{routing::get, Json, Router};

/// Health check routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Assemble the probe routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    /// Handle the liveness probe
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    /// Handle the readiness probe
    async fn handle_ready() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
