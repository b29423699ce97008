// ABOUTME: Pushover API client for delivering window recommendations to phones
// ABOUTME: Posts JSON messages, checks the delivery acknowledgement, includes a recording mock

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors

//! Pushover API Client
//!
//! Delivers one plain-text message per night to the configured Pushover user.
//! The API acknowledges accepted messages with `"status": 1`; anything else is
//! a rejection and surfaces as an external service error carrying the API's
//! own error strings.
//!
//! Upstream documentation: <https://pushover.net/api>

use crate::errors::{AppError, AppResult};
use crate::notifications::Notifier;
use crate::utils::http_client::upstream_client;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

/// Service name used in error messages
const PUSHOVER_SERVICE: &str = "Pushover API";

/// Pushover client configuration
#[derive(Debug, Clone)]
pub struct PushoverClientConfig {
    /// Base URL for the Pushover API (default: <https://api.pushover.net/1>)
    pub base_url: String,
    /// Application token
    pub token: String,
    /// Recipient user key
    pub user: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Connection timeout in seconds (default: 10)
    pub connect_timeout_secs: u64,
}

impl Default for PushoverClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.pushover.net/1".to_owned(),
            token: String::new(),
            user: String::new(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Message payload posted to `/messages.json`
#[derive(Debug, Serialize)]
struct PushoverRequest<'a> {
    token: &'a str,
    user: &'a str,
    message: &'a str,
}

/// Pushover delivery acknowledgement.
///
/// `status` is `1` for accepted messages; rejections carry the API's error
/// strings in `errors` and may name the offending field in `message` or
/// `user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushoverResponse {
    /// Delivery status; `1` means accepted
    #[serde(default)]
    pub status: i64,
    /// Request identifier assigned by Pushover
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// Error strings for rejected deliveries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Error detail for an invalid message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error detail for an invalid user key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Pushover API client
pub struct PushoverClient {
    config: PushoverClientConfig,
    http_client: reqwest::Client,
}

impl PushoverClient {
    /// Create a new Pushover client
    #[must_use]
    pub fn new(config: PushoverClientConfig) -> Self {
        let http_client = upstream_client(config.timeout_secs, config.connect_timeout_secs);
        Self {
            config,
            http_client,
        }
    }
}

#[async_trait]
impl Notifier for PushoverClient {
    async fn notify(&self, message: &str) -> AppResult<PushoverResponse> {
        let url = format!("{}/messages.json", self.config.base_url);
        let request = PushoverRequest {
            token: &self.config.token,
            user: &self.config.user,
            message,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                AppError::external_service(PUSHOVER_SERVICE, format!("Failed to connect: {e}"))
                    .with_source(e)
            })?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                PUSHOVER_SERVICE,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let receipt: PushoverResponse = response.json().await.map_err(|e| {
            AppError::external_service(PUSHOVER_SERVICE, format!("JSON parse error: {e}"))
        })?;

        if receipt.status != 1 {
            let errors = receipt.errors.clone().unwrap_or_default().join(", ");
            return Err(AppError::external_service(
                PUSHOVER_SERVICE,
                format!("Delivery rejected with status {}: {errors}", receipt.status),
            ));
        }

        Ok(receipt)
    }
}

/// Recording notifier for tests (no API calls).
///
/// Stores every delivered message so tests can assert on exactly what would
/// have reached the phone.
#[derive(Debug, Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl MockNotifier {
    /// Create a mock that accepts every message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every delivery with an external service error
    #[must_use]
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Messages delivered so far, oldest first
    pub async fn sent_messages(&self) -> Vec<String> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, message: &str) -> AppResult<PushoverResponse> {
        if self.fail {
            return Err(AppError::external_service(
                PUSHOVER_SERVICE,
                "mock delivery failure",
            ));
        }

        self.sent.lock().await.push(message.to_owned());
        Ok(PushoverResponse {
            status: 1,
            request: Some("mock-request".to_owned()),
            errors: None,
            message: None,
            user: None,
        })
    }
}
