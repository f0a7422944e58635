//! Configuration schema and validators.
//!
//! Pure functions only — no I/O, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::descriptor::DEFAULT_DESCRIPTOR_PATH;
use crate::domain::error::ConfigError;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.gateway-teardown/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TeardownConfig {
    /// Gateway connection settings.
    pub gateway: GatewayConfig,
    /// Where to find the module descriptor.
    pub descriptor: DescriptorConfig,
}

/// Gateway connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL; falls back to `http://localhost:9130`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Token sent as `X-Okapi-Token`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Module descriptor settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorConfig {
    #[serde(default = "default_descriptor_path")]
    pub path: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            path: default_descriptor_path(),
        }
    }
}

fn default_descriptor_path() -> String {
    DEFAULT_DESCRIPTOR_PATH.to_string()
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates values that serde alone cannot reject.
///
/// # Errors
///
/// Returns an error if `gateway.timeout_secs` is zero.
pub fn validate_config(config: &TeardownConfig) -> Result<()> {
    if config.gateway.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidValue {
            key: "gateway.timeout_secs".to_string(),
            value: "0".to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
