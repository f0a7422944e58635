//! `gateway-teardown clean-env` — delete every gateway environment variable.

use anyhow::Result;

use crate::application::services::config_service;
use crate::application::services::env_cleanup;
use crate::commands::{CleanEnvArgs, print_summary};
use crate::infra::config::YamlConfigStore;
use crate::infra::http::UreqGateway;
use crate::output::{OutputContext, TerminalReporter};

/// Run `gateway-teardown clean-env`.
///
/// # Errors
///
/// Returns an error only if the configuration or gateway address is invalid.
pub fn run(ctx: &OutputContext, args: &CleanEnvArgs, token: Option<&str>) -> Result<()> {
    let config = config_service::load_config(&YamlConfigStore)?;
    let settings = config_service::resolve_settings(args.gateway.as_deref(), token, &config)?;

    ctx.header(&format!("Cleaning environment on {}", settings.address));
    let gateway = UreqGateway::new(&settings);
    let report = env_cleanup::clean_environment(&gateway, &TerminalReporter::new(ctx));
    print_summary(ctx, &report);
    Ok(())
}
