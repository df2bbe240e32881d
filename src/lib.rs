pub mod cli;
mod commands;
pub mod core;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

pub use crate::core::error::{SetupError, SetupResult};
pub use crate::core::installer::{InstallContext, InstallOutcome, Installer};
pub use crate::core::platform::Platform;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "debug"
    } else {
        "info,lazarus_setup=debug"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point of the `lazarus-setup` binary.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_versions {
        return match commands::list_versions() {
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        };
    }

    tracing::info!("lazarus-setup {} starting...", env!("CARGO_PKG_VERSION"));

    let outcome = match commands::install(&cli).await {
        Ok(outcome) => outcome,
        Err(e) => return fail(&e),
    };

    match commands::render_outcome(&outcome, cli.format) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

/// Report through the log and as a workflow error annotation.
fn fail(err: &SetupError) -> ExitCode {
    tracing::error!("{err}");
    println!("::error::{err}");
    if err.is_configuration_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
