//! Configuration management

use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Corridor table location used when --corridor is not given
    pub corridor_csv: PathBuf,

    /// Output location used when --output is not given
    pub output_csv: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let corridor_csv = std::env::var("CORRIDOR_CSV")
            .unwrap_or_else(|_| "corridor.csv".to_string());

        let output_csv = std::env::var("OUTPUT_CSV")
            .unwrap_or_else(|_| "optimized_requests.csv".to_string());

        Self {
            corridor_csv: corridor_csv.into(),
            output_csv: output_csv.into(),
        }
    }
}
