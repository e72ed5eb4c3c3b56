//! gridlab CLI - grid-world Q-learning trainer
//!
//! Provides headless training over the default grid with progress reporting,
//! per-episode stat export, and a layout inspector.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gridlab")]
#[command(version, about = "Grid-world Q-learning trainer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the agent on the default grid
    Train(gridlab::cli::commands::train::TrainArgs),

    /// Print the default grid layout and reward scheme
    Layout,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => gridlab::cli::commands::train::execute(args),
        Commands::Layout => gridlab::cli::commands::layout::execute(),
    }
}
