//! Runtime configuration pulled from the environment.
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Port the dashboard binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8050;

const DEFAULT_DATA_PATH: &str = "sales_data.csv";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Path to the sales data CSV file
    pub data_path: PathBuf,
    /// Directory holding the built frontend assets
    pub frontend_dist: PathBuf,
}

impl Config {
    /// Read configuration from `PORT`, `SALES_DATA` and `FRONTEND_DIST`,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        let data_path = std::env::var("SALES_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));
        let frontend_dist = std::env::var("FRONTEND_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FRONTEND_DIST));

        Ok(Self {
            port,
            data_path,
            frontend_dist,
        })
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("invalid PORT value '{raw}'"))
}
