//! Application service — configuration and input resolution.
//!
//! Everything here runs before the first request; any error is fatal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::{ConfigStore, DescriptorSource};
use crate::domain::descriptor::parse_descriptor;
use crate::domain::{DescriptorError, GatewayAddress, ModuleId, TeardownConfig, validate_config};

/// Connection settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySettings {
    pub address: GatewayAddress,
    pub token: Option<String>,
    pub timeout: Option<Duration>,
}

/// Load and validate configuration.
///
/// # Errors
///
/// Returns an error if the configuration file is unreadable or invalid.
pub fn load_config(store: &impl ConfigStore) -> Result<TeardownConfig> {
    let config = store.load()?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve connection settings. `address` and `token` come from the command
/// line (or their environment variables) and win over the configuration file.
///
/// # Errors
///
/// Returns an error if the chosen address is not a valid URL.
pub fn resolve_settings(
    address: Option<&str>,
    token: Option<&str>,
    config: &TeardownConfig,
) -> Result<GatewaySettings> {
    let address = match address.or(config.gateway.url.as_deref()) {
        Some(raw) => GatewayAddress::parse(raw)?,
        None => GatewayAddress::default(),
    };
    let token = token
        .map(str::to_string)
        .or_else(|| config.gateway.token.clone())
        .filter(|t| !t.trim().is_empty());
    Ok(GatewaySettings {
        address,
        token,
        timeout: config.gateway.timeout_secs.map(Duration::from_secs),
    })
}

/// Resolve the module to tear down: `--module` if given, else the `id` of
/// the descriptor at `descriptor` (or the configured descriptor path).
///
/// # Errors
///
/// Returns an error if the module id is invalid or the descriptor is
/// missing, unreadable, or has no `id`.
pub fn resolve_module(
    module: Option<&str>,
    descriptor: Option<PathBuf>,
    config: &TeardownConfig,
    source: &impl DescriptorSource,
) -> Result<ModuleId> {
    if let Some(raw) = module {
        return Ok(ModuleId::parse(raw)?);
    }
    let path = descriptor.unwrap_or_else(|| PathBuf::from(&config.descriptor.path));
    let origin = path.display().to_string();
    let content = source
        .read(&path)
        .with_context(|| format!("cannot read {origin}"))?
        .ok_or_else(|| DescriptorError::NotFound(origin.clone()))?;
    let descriptor = parse_descriptor(&content, &origin)?;
    Ok(ModuleId::parse(&descriptor.id)?)
}
