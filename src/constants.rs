// ABOUTME: System-wide constants and configuration values for the Nightvent server
// ABOUTME: Environment-backed defaults and service identifiers shared across modules
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed values shared across modules.
//!
//! Anything tunable per deployment lives in `config` instead; `env_config`
//! wraps the raw environment reads shared by configuration and logging.

use std::env;

/// Environment-backed startup defaults
pub mod env_config {
    use super::env;

    /// HTTP port from `HTTP_PORT`, defaulting to 8080
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080)
    }

    /// Raw log level string from `LOG_LEVEL`, defaulting to `info`
    #[must_use]
    pub fn log_level() -> String {
        env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_owned())
    }
}

/// Service names used in logs and health payloads
pub mod service_names {
    /// Nightvent server service name
    pub const NIGHTVENT_SERVER: &str = "nightvent-server";
}
