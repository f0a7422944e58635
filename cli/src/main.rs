//! gateway-teardown - deactivate, undeploy and clean up gateway modules

use clap::Parser;

use gateway_teardown::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
