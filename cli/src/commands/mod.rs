//! Command implementations

pub mod clean_env;
pub mod config;
pub mod deactivate;
pub mod undeploy;

use std::path::PathBuf;

use clap::Args;

use crate::domain::Report;
use crate::output::OutputContext;

/// Arguments for the deactivate command.
#[derive(Args)]
pub struct DeactivateArgs {
    /// Tenant to deactivate the module for
    pub tenant: String,

    /// Gateway base URL [default: http://localhost:9130]
    #[arg(env = "GATEWAY_URL")]
    pub gateway: Option<String>,

    /// Module id (read from the descriptor when omitted)
    #[arg(long)]
    pub module: Option<String>,

    /// Path to the module descriptor [default: target/ModuleDescriptor.json]
    #[arg(long, conflicts_with = "module")]
    pub descriptor: Option<PathBuf>,
}

/// Arguments for the undeploy command.
#[derive(Args)]
pub struct UndeployArgs {
    /// Module whose instances to undeploy
    pub module: String,

    /// Tenant the module belongs to
    pub tenant: String,

    /// Gateway base URL [default: http://localhost:9130]
    #[arg(env = "GATEWAY_URL")]
    pub gateway: Option<String>,
}

/// Arguments for the clean-env command.
#[derive(Args)]
pub struct CleanEnvArgs {
    /// Gateway base URL [default: http://localhost:9130]
    #[arg(long)]
    pub gateway: Option<String>,
}

/// Print the closing line for a procedure run.
pub(crate) fn print_summary(ctx: &OutputContext, report: &Report) {
    if report.is_clean() {
        ctx.success(&format!("Done ({})", report.summary()));
    } else {
        // Failures were already printed; partial teardown is a normal outcome.
        println!("  Finished with failures ({})", report.summary());
    }
}
