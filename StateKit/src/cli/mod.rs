//! StateKit CLI - the interaction shell over the catalog and the
//! transfer engine

pub mod commands;
pub mod progress;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "statekit")]
#[command(about = "StateKit: state file tools for Hearts of Iron IV mods", long_about = None)]
struct Cli {
    /// Path to statekit.toml (defaults to ./statekit.toml, then the
    /// platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Run the StateKit CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute(cli.config.as_deref())?;

    Ok(())
}
