// ABOUTME: Notification delivery module for pushing nightly recommendations to devices
// ABOUTME: Defines the async notifier seam and re-exports the Pushover implementation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors

use crate::errors::AppResult;
use async_trait::async_trait;

/// Pushover message delivery client
pub mod pushover;

pub use pushover::{MockNotifier, PushoverClient, PushoverClientConfig, PushoverResponse};

/// Delivery channel for nightly window recommendations.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message and return the channel's acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns an external-service error when the channel cannot be reached
    /// or rejects the delivery.
    async fn notify(&self, message: &str) -> AppResult<PushoverResponse>;
}
