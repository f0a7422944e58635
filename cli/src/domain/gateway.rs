//! Gateway address, admin endpoint paths, and the records the admin API returns.
//!
//! Pure functions only — no I/O.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::domain::error::InputError;
use crate::domain::ids::{ModuleId, TenantId};

// ── Constants ────────────────────────────────────────────────────────────────

/// Address used when neither the command line, the environment, nor the
/// configuration file names a gateway.
pub const DEFAULT_GATEWAY: &str = "http://localhost:9130";

pub const STATUS_OK: u16 = 200;
pub const STATUS_NO_CONTENT: u16 = 204;

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

// ── Address ──────────────────────────────────────────────────────────────────

/// Base URL of the gateway's management API, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayAddress(String);

impl GatewayAddress {
    /// Parse a base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an `http://` or `https://` URL.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let trimmed = raw.trim().trim_end_matches('/');
        let host = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(InputError::InvalidGatewayAddress(raw.to_string())),
        }
    }

    /// Join an absolute endpoint path onto the base address.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for GatewayAddress {
    fn default() -> Self {
        Self(DEFAULT_GATEWAY.to_string())
    }
}

impl fmt::Display for GatewayAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Endpoint paths ───────────────────────────────────────────────────────────

/// Admin API paths, relative to the gateway address.
///
/// Instance ids and variable names come from the gateway's own listings and
/// are percent-encoded; module and tenant ids are validated on input.
pub mod endpoints {
    use super::{ModuleId, PATH_SEGMENT, TenantId, utf8_percent_encode};

    #[must_use]
    pub fn tenant_module(tenant: &TenantId, module: &ModuleId) -> String {
        format!("/_/proxy/tenants/{tenant}/modules/{module}")
    }

    #[must_use]
    pub fn proxy_module(module: &ModuleId) -> String {
        format!("/_/proxy/modules/{module}")
    }

    #[must_use]
    pub fn discovery_module(module: &ModuleId) -> String {
        format!("/_/discovery/modules/{module}")
    }

    #[must_use]
    pub fn discovery_instance(module: &ModuleId, instance: &str) -> String {
        format!(
            "/_/discovery/modules/{module}/{}",
            utf8_percent_encode(instance, PATH_SEGMENT)
        )
    }

    #[must_use]
    pub fn env_list() -> String {
        "/_/env".to_string()
    }

    #[must_use]
    pub fn env_entry(name: &str) -> String {
        format!("/_/env/{}", utf8_percent_encode(name, PATH_SEGMENT))
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

/// Status and body of a completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One running instance as reported by `GET /_/discovery/modules/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRecord {
    pub inst_id: String,
    #[serde(default)]
    pub srvc_id: Option<String>,
    #[serde(default)]
    pub node_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One environment variable as reported by `GET /_/env`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvEntry {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Decode a discovery listing.
///
/// # Errors
///
/// Returns the decoder message if the body is not an array of instances.
pub fn parse_instances(body: &str) -> Result<Vec<InstanceRecord>, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

/// Decode an environment listing.
///
/// # Errors
///
/// Returns the decoder message if the body is not an array of entries.
pub fn parse_env_entries(body: &str) -> Result<Vec<EnvEntry>, String> {
    serde_json::from_str(body).map_err(|e| e.to_string())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
