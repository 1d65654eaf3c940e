use anyhow::{Context, Result};

use crate::humanize::transformer::DEFAULT_MAX_INPUT_BYTES;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Inputs longer than this are returned untransformed.
    pub max_input_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_input_bytes: match std::env::var("HUMANIZER_MAX_INPUT_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("HUMANIZER_MAX_INPUT_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_INPUT_BYTES,
            },
        })
    }
}
