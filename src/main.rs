//! marty - bundled GitHub workflow manager
//!
//! Lists, adds, updates and deletes the workflow templates that ship with
//! marty inside a project's `.github/workflows` directory.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod cli;
mod commands;
mod config;
mod error;
mod hash;
mod workflow;

use cli::{Cli, Commands};
use config::Settings;
use error::Result;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `--verbose` turns on debug output.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "marty=debug" } else { "marty=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Workflow(args) => {
            let settings = Settings::resolve(cli.path, cli.workflows_dir)?;
            commands::workflow(&settings, args)
        }
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
