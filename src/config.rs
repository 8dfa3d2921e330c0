//! Application configuration loaded from environment variables.
//!
//! The store credentials are external inputs the deployer must supply;
//! host, port and pool size fall back to local-development defaults.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL host
    pub db_host: String,
    /// PostgreSQL port
    pub db_port: u16,
    /// PostgreSQL user
    pub db_user: String,
    /// PostgreSQL password
    pub db_password: String,
    /// PostgreSQL database name
    pub db_name: String,
    /// Upper bound on pooled connections to the store
    pub db_max_connections: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            db_host: "localhost".to_string(),
            db_port: 5432,
            db_user: "test_user".to_string(),
            db_password: "test_password".to_string(),
            db_name: "test_db".to_string(),
            db_max_connections: 5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DB_USER`, `DB_PASSWORD` and `DB_NAME` are required. A `.env` file in
    /// the working directory is honored for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            db_host: env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_port: env::var("DB_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            db_user: env::var("DB_USER").map_err(|_| ConfigError::Missing("DB_USER"))?,
            db_password: env::var("DB_PASSWORD")
                .map_err(|_| ConfigError::Missing("DB_PASSWORD"))?,
            db_name: env::var("DB_NAME").map_err(|_| ConfigError::Missing("DB_NAME"))?,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
