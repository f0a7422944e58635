//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Input errors ──────────────────────────────────────────────────────────────

/// Errors raised while validating command-line input. All of these are fatal
/// and occur before any request reaches the gateway.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{kind} must not be empty")]
    EmptyIdentifier { kind: &'static str },

    #[error("Invalid {kind} '{value}': must not contain whitespace or '/'")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid gateway address '{0}': expected an http:// or https:// URL")]
    InvalidGatewayAddress(String),
}

// ── Descriptor errors ─────────────────────────────────────────────────────────

/// Errors related to the local module descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("Module descriptor not found at {0}. Pass --module or --descriptor.")]
    NotFound(String),

    #[error("Module descriptor {path} is not valid JSON: {reason}")]
    Malformed { path: String, reason: String },

    #[error("Module descriptor {0} has no string field 'id'")]
    MissingId(String),
}

// ── Gateway errors ────────────────────────────────────────────────────────────

/// A request that never produced an HTTP status.
///
/// Status codes, including 4xx/5xx, are not errors at this level: they come
/// back as an [`ApiResponse`](crate::domain::gateway::ApiResponse) so the
/// caller decides what counts as success.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("could not read response from {url}: {message}")]
    Body { url: String, message: String },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
