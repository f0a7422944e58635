//! `gateway-teardown deactivate <tenant> [gateway]` — full module teardown.

use anyhow::Result;

use crate::application::services::config_service;
use crate::application::services::teardown;
use crate::commands::{DeactivateArgs, print_summary};
use crate::domain::TenantId;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::FsDescriptorSource;
use crate::infra::http::UreqGateway;
use crate::output::{OutputContext, TerminalReporter};

/// Run `gateway-teardown deactivate`.
///
/// # Errors
///
/// Returns an error only for invalid input, before any request is made.
/// Failed gateway calls are reported and do not produce an error.
pub fn run(ctx: &OutputContext, args: &DeactivateArgs, token: Option<&str>) -> Result<()> {
    let tenant = TenantId::parse(&args.tenant)?;
    let config = config_service::load_config(&YamlConfigStore)?;
    let module = config_service::resolve_module(
        args.module.as_deref(),
        args.descriptor.clone(),
        &config,
        &FsDescriptorSource,
    )?;
    let settings = config_service::resolve_settings(args.gateway.as_deref(), token, &config)?;

    ctx.header(&format!(
        "Tearing down {module} for tenant {tenant} on {}",
        settings.address
    ));
    let gateway = UreqGateway::new(&settings);
    let report = teardown::teardown(&gateway, &module, &tenant, &TerminalReporter::new(ctx));
    print_summary(ctx, &report);
    Ok(())
}
