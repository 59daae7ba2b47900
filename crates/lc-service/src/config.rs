//! Life Calendar configuration.
//!
//! Configuration is loaded from environment variables. The only service
//! setting is the listening port.

use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default listening port when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Life Calendar configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listening port (default: 8080).
    pub port: u16,

    /// Server bind address, all interfaces on `port`.
    pub bind_address: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port configuration: {0}")]
    InvalidPort(String),
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        // An empty PORT counts as unset
        let port = match vars.get("PORT").map(|s| s.trim()) {
            None | Some("") => DEFAULT_PORT,
            Some(value_str) => value_str.parse().map_err(|e| {
                ConfigError::InvalidPort(format!(
                    "PORT must be an integer between 0 and 65535, got '{}': {}",
                    value_str, e
                ))
            })?,
        };

        Ok(Config {
            port,
            bind_address: format!("0.0.0.0:{}", port),
        })
    }
}
