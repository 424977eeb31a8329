//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use crate::error::AppError;
use chrono_tz::Tz;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub business: BusinessConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Database configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,

    /// Idle connection timeout in seconds
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Apply pending migrations at startup
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_true() -> bool {
    true
}

/// Cross-origin configuration for the browser front end
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

fn default_allowed_origins() -> String {
    "http://localhost:5173,http://localhost:4173,http://localhost:5174".to_string()
}

impl CorsConfig {
    /// Allowed origins, trimmed, empty entries dropped
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Business rules that depend on deployment
#[derive(Debug, Deserialize, Clone)]
pub struct BusinessConfig {
    /// IANA timezone used to stamp project dates and resolve "this month"
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Insert the default rate card when the rates table is empty
    #[serde(default = "default_true")]
    pub seed_default_rates: bool,
}

fn default_timezone() -> String {
    "Asia/Jakarta".to_string()
}

impl BusinessConfig {
    /// Parse the configured timezone
    pub fn tz(&self) -> Result<Tz, AppError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Config(format!("Invalid timezone {}: {}", self.timezone, e)))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            seed_default_rates: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.run_migrations", true)?
            .set_default("cors.allowed_origins", default_allowed_origins())?
            .set_default("business.timezone", default_timezone())?
            .set_default("business.seed_default_rates", true)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with FEE_ prefix
            .add_source(
                Environment::with_prefix("FEE")
                    .separator("__")
                    .try_parsing(true),
            );

        // Support legacy environment variables
        if let Ok(url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", url)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_business_config() {
        let config = BusinessConfig::default();
        assert!(config.seed_default_rates);
        assert_eq!(config.tz().unwrap(), chrono_tz::Asia::Jakarta);
    }

    #[test]
    fn test_invalid_timezone() {
        let config = BusinessConfig {
            timezone: "Mars/Olympus".to_string(),
            seed_default_rates: false,
        };
        assert!(matches!(config.tz(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_cors_origins() {
        let cors = CorsConfig {
            allowed_origins: "http://a.test, http://b.test,,".to_string(),
        };
        assert_eq!(cors.origins(), vec!["http://a.test", "http://b.test"]);
    }
}
