// ABOUTME: Configuration modules for the Nightvent server
// ABOUTME: Handles environment configs, forecast location, and ventilation threshold overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nightvent Contributors

//! Configuration for the Nightvent server.
//!
//! Split in two: [`environment`] assembles the full [`ServerConfig`] from
//! process environment variables, and [`thresholds`] holds the ventilation
//! decision thresholds with their `WINDOW_*` overrides.

/// Environment-driven server configuration
pub mod environment;
/// Ventilation decision thresholds
pub mod thresholds;

// Re-export the types almost every consumer needs
pub use environment::{LogLevel, ServerConfig};
pub use thresholds::VentilationThresholds;
