// ABOUTME: Route module organization for the Nightvent HTTP endpoints
// ABOUTME: Groups probe routes and window recommendation routes into separate modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Route modules for the Nightvent server.
//!
//! Routes are grouped by concern. Handlers stay thin and delegate to the
//! engine, providers, and notifier held in
//! [`crate::server::ServerResources`]; probe routes carry no state at all.

/// Liveness and readiness probe routes
pub mod health;
/// Window recommendation and notification relay routes
pub mod windows;

/// Probe route handlers
pub use health::HealthRoutes;
/// Notification relay request payload
pub use windows::NotifyRequest;
/// Window recommendation route handlers
pub use windows::WindowRoutes;
