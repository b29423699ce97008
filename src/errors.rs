// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Error Handling
//!
//! One error type, [`AppError`], flows through the whole advisor: providers,
//! notifier, engine construction and route handlers all speak it. Every error
//! carries a stable machine-readable [`ErrorCode`], and the axum integration
//! renders it as a JSON body of the form
//! `{"error": {"code", "message", "request_id"?, "details"}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used across the advisor
pub type AppResult<T> = Result<T, AppError>;

/// Stable error codes exposed on the HTTP surface.
///
/// Codes are grouped by concern; the wire names are the SCREAMING_SNAKE_CASE
/// renderings asserted by API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Request validation
    /// Request input failed validation
    InvalidInput,
    /// A required field was not supplied
    MissingRequiredField,
    /// Data was syntactically malformed
    InvalidFormat,
    /// A numeric value fell outside its permitted range
    ValueOutOfRange,

    // Resources
    /// The requested resource does not exist
    ResourceNotFound,

    // Upstream services
    /// An upstream service answered with an error
    ExternalServiceError,
    /// An upstream service could not be reached
    ExternalServiceUnavailable,

    // Configuration
    /// Configuration could not be applied
    ConfigError,
    /// Required configuration is absent
    ConfigMissing,
    /// Configuration values are inconsistent
    ConfigInvalid,

    // Internal
    /// Unexpected internal failure
    InternalError,
    /// Data serialization or deserialization failed
    SerializationError,
}

impl ErrorCode {
    /// HTTP status this code maps onto
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange => 400,
            Self::ResourceNotFound => 404,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::ConfigError
            | Self::ConfigMissing
            | Self::ConfigInvalid
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Short human-readable summary of the code, used as the `Display` prefix
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::MissingRequiredField => "Missing required field",
            Self::InvalidFormat => "Invalid format",
            Self::ValueOutOfRange => "Value out of range",
            Self::ResourceNotFound => "Resource not found",
            Self::ExternalServiceError => "External service error",
            Self::ExternalServiceUnavailable => "External service unavailable",
            Self::ConfigError => "Configuration error",
            Self::ConfigMissing => "Configuration missing",
            Self::ConfigInvalid => "Configuration invalid",
            Self::InternalError => "Internal error",
            Self::SerializationError => "Serialization error",
        }
    }
}

/// Supplementary error context carried through to the HTTP response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Request ID for tracing, when one is known
    pub request_id: Option<String>,
    /// Free-form structured details
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            request_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// The advisor's unified error type
#[derive(Debug, Error)]
pub struct AppError {
    /// Stable machine-readable code
    pub code: ErrorCode,
    /// Message shown to operators and API callers
    pub message: String,
    /// Supplementary context
    pub context: ErrorContext,
    /// Underlying cause, kept for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Build an error from a code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Rejected request input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Inconsistent configuration values
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// An upstream service answered, but with an error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// An upstream service could not be reached at all
    #[must_use]
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// Attach a request ID for tracing
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.context.request_id = Some(request_id.into());
        self
    }

    /// Attach structured details for the response body
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        let mut converted = Self::new(ErrorCode::InternalError, error.to_string());
        if let Some(cause) = error.source() {
            converted = converted.with_details(serde_json::json!({ "source": cause.to_string() }));
        }
        converted
    }
}

/// Axum integration: an `AppError` renders as its mapped status with a JSON body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// JSON envelope for HTTP error responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Payload of an HTTP error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Stable machine-readable error code
    pub code: ErrorCode,
    /// Message shown to operators and API callers
    pub message: String,
    /// Request ID for tracing, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Free-form structured details
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                request_id: error.context.request_id,
                details: error.context.details,
            },
        }
    }
}
