// ABOUTME: In-process HTTP harness for exercising axum routers in tests
// ABOUTME: Builds requests, dispatches them through tower, and decodes responses

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::Serialize;
use tower::ServiceExt;

/// Request builder that dispatches straight into a router, no listener needed
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    json_body: Option<String>,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            json_body: None,
        }
    }

    /// Start a GET request
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    /// Start a POST request
    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    /// Attach a JSON body, setting the content type to match
    pub fn json<T: Serialize>(mut self, data: &T) -> Self {
        let payload = serde_json::to_string(data).expect("Failed to serialize request body");
        self.json_body = Some(payload);
        self
    }

    /// Drive the request through the router and buffer the whole response
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let builder = Request::builder().method(self.method).uri(self.uri);
        let request = match self.json_body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload)),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build test request");

        let response = app
            .oneshot(request)
            .await
            .expect("Failed to dispatch request");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to buffer response body");

        AxumTestResponse { status, body }
    }
}

/// Fully buffered response with assertion-friendly accessors
pub struct AxumTestResponse {
    status: StatusCode,
    body: Bytes,
}

impl AxumTestResponse {
    /// Numeric status code
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Decode the body as JSON into the requested type
    pub fn json<T: serde::de::DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse response as JSON")
    }

    /// Body interpreted as UTF-8 text
    pub fn text(self) -> String {
        String::from_utf8(self.body.to_vec()).expect("Response body was not UTF-8")
    }
}
