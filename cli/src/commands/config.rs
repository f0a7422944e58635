//! `gateway-teardown config` — inspect configuration.

use anyhow::Result;
use clap::Subcommand;

use crate::application::ports::ConfigStore;
use crate::application::services::config_service;
use crate::infra::config::YamlConfigStore;
use crate::output::OutputContext;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or is invalid.
pub fn run(ctx: &OutputContext, cmd: &ConfigCommand, token: Option<&str>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(ctx, &YamlConfigStore, token),
    }
}

fn show_config(ctx: &OutputContext, store: &impl ConfigStore, token: Option<&str>) -> Result<()> {
    let config = config_service::load_config(store)?;
    let path = store.path()?;
    let gateway = std::env::var("GATEWAY_URL").ok();
    let settings = config_service::resolve_settings(gateway.as_deref(), token, &config)?;

    ctx.header("Configuration");
    ctx.kv("file      ", &path.display().to_string());
    ctx.kv("gateway   ", settings.address.as_str());
    ctx.kv("token     ", if settings.token.is_some() { "(set)" } else { "(none)" });
    let timeout = settings
        .timeout
        .map_or_else(|| "client default".to_string(), |t| format!("{}s", t.as_secs()));
    ctx.kv("timeout   ", &timeout);
    ctx.kv("descriptor", &config.descriptor.path);
    Ok(())
}
