//! `gateway-teardown undeploy <module> <tenant> [gateway]` — reclaim running
//! instances and leave the proxy registration in place.

use anyhow::Result;

use crate::application::services::config_service;
use crate::application::services::teardown;
use crate::commands::{UndeployArgs, print_summary};
use crate::domain::{ModuleId, TenantId};
use crate::infra::config::YamlConfigStore;
use crate::infra::http::UreqGateway;
use crate::output::{OutputContext, TerminalReporter};

/// Run `gateway-teardown undeploy`.
///
/// # Errors
///
/// Returns an error only for invalid input, before any request is made.
pub fn run(ctx: &OutputContext, args: &UndeployArgs, token: Option<&str>) -> Result<()> {
    let module = ModuleId::parse(&args.module)?;
    let tenant = TenantId::parse(&args.tenant)?;
    let config = config_service::load_config(&YamlConfigStore)?;
    let settings = config_service::resolve_settings(args.gateway.as_deref(), token, &config)?;

    ctx.header(&format!(
        "Undeploying instances of {module} (tenant {tenant}) on {}",
        settings.address
    ));
    let gateway = UreqGateway::new(&settings);
    let report = teardown::undeploy_instances(&gateway, &module, &TerminalReporter::new(ctx));
    print_summary(ctx, &report);
    Ok(())
}
