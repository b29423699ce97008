// ABOUTME: Construction of the reqwest client shared by upstream callers
// ABOUTME: Applies the request and connect timeouts from the client configs

use reqwest::Client;
use std::time::Duration;

/// Build the client used for upstream HTTP calls.
///
/// Timeouts are whole seconds, matching the fields on the provider and
/// notifier configs. Falls back to the default client when construction
/// fails.
#[must_use]
pub fn upstream_client(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
