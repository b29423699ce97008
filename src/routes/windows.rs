// ABOUTME: Window recommendation route handlers for the nightly ventilation advice
// ABOUTME: Provides REST endpoints for computing recommendations and relaying notifications
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Window recommendation routes
//!
//! `GET /windows` evaluates tonight's forecast into a full
//! [`crate::models::WindowRecommendation`]. A failed forecast fetch surfaces
//! as a 502 through [`AppError`]; a failed air-quality fetch only degrades the
//! decision to weather data alone. `POST /windows` relays an arbitrary message
//! through the configured notifier and returns the delivery receipt.

use crate::{errors::AppError, server::ServerResources};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Notification relay request
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyRequest {
    /// Message text to deliver verbatim
    pub message: String,
}

/// Window recommendation routes
pub struct WindowRoutes;

impl WindowRoutes {
    /// Create all window recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/windows", get(Self::handle_get_recommendation))
            .route("/windows", post(Self::handle_notify))
            .with_state(resources)
    }

    /// Handle computing tonight's window recommendation
    async fn handle_get_recommendation(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let recommendation = resources.nightly_recommendation().await?;
        Ok((StatusCode::OK, Json(recommendation)).into_response())
    }

    /// Handle relaying a message through the notifier
    async fn handle_notify(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<NotifyRequest>,
    ) -> Result<Response, AppError> {
        if request.message.trim().is_empty() {
            return Err(AppError::invalid_input("message must not be empty"));
        }

        let receipt = resources.notifier.notify(&request.message).await?;
        Ok((StatusCode::OK, Json(receipt)).into_response())
    }
}
