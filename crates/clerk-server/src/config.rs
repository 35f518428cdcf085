//! Configuration file parsing for the brief server.
//!
//! Loads the bind address and the location of the `clerk` binary from TOML.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Invalid field value
    #[error("Invalid configuration field: {0}")]
    InvalidField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8000)
    pub bind_port: u16,

    /// The `clerk` binary to spawn
    pub clerk_bin: PathBuf,

    /// Config file handed to `clerk` as `--config`
    pub clerk_config: Option<PathBuf>,

    /// Working directory of the spawned process; relative output paths
    /// reported by `clerk` resolve against it
    pub work_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8000,
            clerk_bin: PathBuf::from("clerk"),
            clerk_config: None,
            work_dir: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;

        if config.clerk_bin.as_os_str().is_empty() {
            return Err(ConfigError::InvalidField("clerk_bin".to_string()));
        }

        Ok(config)
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}
