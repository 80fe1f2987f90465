//! CLI argument parsing for the corridor-optimizer binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "corridor-optimizer",
    about = "Fits possession requests into corridor blocks"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Adjust a request CSV against the corridor table and write the
    /// optimized CSV
    Optimize {
        /// Path to the request CSV
        #[arg(long)]
        requests: PathBuf,
        /// Path to the corridor CSV (defaults to the configured path)
        #[arg(long)]
        corridor: Option<PathBuf>,
        /// Output path for the optimized CSV (defaults to the configured path)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
