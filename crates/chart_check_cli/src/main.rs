use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod errors;

use commands::check_cmd::{self, CheckArgs};
use commands::merge_cmd::{self, MergeArgs};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// ChartCheck CLI: merge layered chart values and verify rendered manifests
#[derive(Parser)]
#[command(name = "chart-check")]
#[command(about = "Merge layered chart values and verify rendered manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deep-merge values files and print the merged tree
    Merge(MergeArgs),

    /// Render a chart and evaluate expectations against the output
    Check(CheckArgs),

    /// Show the CLI version
    Version,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().pretty())
        .with(EnvFilter::from_env("CHART_CHECK_LOG"))
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Merge(args) => {
            if let Err(e) = merge_cmd::execute(args) {
                error!("Error: {e}");
                std::process::exit(1);
            }
        }
        Commands::Check(args) => match check_cmd::execute(args) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                error!("Error: {e}");
                std::process::exit(1);
            }
        },
        Commands::Version => {
            println!("chart-check {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
