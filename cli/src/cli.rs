//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Deactivate, undeploy and clean up modules on a service gateway
#[derive(Parser)]
#[command(
    name = "gateway-teardown",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Suppress progress output (failures are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print every request made to the gateway
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output (also disabled by a non-empty NO_COLOR)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Token sent to the gateway as X-Okapi-Token
    #[arg(long, global = true, env = "GATEWAY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deactivate the module for a tenant, remove it from the proxy, and
    /// undeploy its instances
    Deactivate(commands::DeactivateArgs),

    /// Undeploy a module's running instances only
    Undeploy(commands::UndeployArgs),

    /// Delete all gateway environment variables
    CleanEnv(commands::CleanEnvArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid. Gateway call failures are
    /// reported as output, not as errors.
    pub fn run(self) -> Result<()> {
        let Cli {
            quiet,
            verbose,
            no_color,
            token,
            command,
        } = self;
        let ctx = OutputContext::new(no_color, quiet).with_verbose(verbose);
        let token = token.as_deref();
        match command {
            Command::Deactivate(args) => commands::deactivate::run(&ctx, &args, token),
            Command::Undeploy(args) => commands::undeploy::run(&ctx, &args, token),
            Command::CleanEnv(args) => commands::clean_env::run(&ctx, &args, token),
            Command::Config(cmd) => commands::config::run(&ctx, &cmd, token),
        }
    }
}
