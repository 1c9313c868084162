//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_RUST_LOG: &str = "chatline=debug,tower_http=info";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Upper bound on pooled database connections
    pub database_max_connections: u32,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from
    /// the discrete `DB_*` variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                var_or("DB_USER", "postgres"),
                var_or("DB_PASSWORD", "postgres"),
                var_or("DB_HOST", "localhost"),
                var_or("DB_PORT", "5432"),
                var_or("DB_NAME", "chat"),
            ),
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            database_max_connections,
            rust_log: var_or("RUST_LOG", DEFAULT_RUST_LOG),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}
