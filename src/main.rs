//! corridor-optimizer - fits possession requests into corridor blocks.
//!
//! Reads a request CSV and a corridor CSV, adjusts every request into its
//! group's corridor window and writes the augmented table back out.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use corridor_optimizer::cli::{Cli, Command};
use corridor_optimizer::config::Config;
use corridor_optimizer::services::{export, import, optimize};

fn main() -> Result<()> {
    // Logs directory - use LOGS_DIR env var or default to ./logs
    let logs_dir = std::env::var("LOGS_DIR").unwrap_or_else(|_| "logs".to_string());
    std::fs::create_dir_all(&logs_dir).ok();

    // File appender for persistent logs (daily rotation)
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "optimizer.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize logging - both stdout and file
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,corridor_optimizer=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer()) // stdout
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        ) // file
        .init();

    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Optimize {
            requests,
            corridor,
            output,
        } => {
            let corridor_path = corridor.unwrap_or_else(|| config.corridor_csv.clone());
            let output_path = output.unwrap_or_else(|| config.output_csv.clone());

            let request_table = import::load_requests(&requests)?;
            let corridor_records = import::load_corridor(&corridor_path)?;

            let optimized = optimize::optimize(&request_table, &corridor_records)?;
            export::write_optimized(&output_path, &request_table, &optimized)?;

            info!(
                "optimized {} requests into '{}'",
                optimized.len(),
                output_path.display()
            );
        }
    }

    Ok(())
}
