// ABOUTME: Small shared utilities that do not belong to a single subsystem
// ABOUTME: Currently holds the HTTP client construction used by providers and the notifier
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Nightvent Contributors

/// Shared reqwest client construction
pub mod http_client;
