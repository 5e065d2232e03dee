//! Application settings loading from config.toml
//!
//! Settings are read from a TOML file whose path comes from `INVENTORY_CONFIG`
//! (default `./config.toml`). A missing file is not an error: every field has a
//! default. `DATABASE_URL` and `BIND_ADDRESS` from the environment (or `.env`)
//! override whatever the file says.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default `SQLite` database, created next to the binary on first run
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db?mode=rwc";

/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub bind_address: String,
    /// Origins allowed to call the API cross-origin; empty means any origin
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides using `lookup` to read variables.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(address) = lookup("BIND_ADDRESS") {
            self.bind_address = address;
        }
        self
    }
}

/// Parses configuration from a TOML string.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file, falling back to defaults if it does not exist.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    parse_config(&contents)
}

/// Loads the full application configuration: file first, then environment overrides.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("INVENTORY_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
    let config = load_config(&path)?.with_overrides(|key| std::env::var(key).ok());
    info!(
        database_url = %config.database_url,
        bind_address = %config.bind_address,
        "Loaded application configuration"
    );
    Ok(config)
}
