//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use clerk_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClerkConfig {
    /// Generation backend
    #[serde(default)]
    pub llm: LlmSettings,

    /// Case-law database
    #[serde(default)]
    pub courtlistener: CourtListenerSettings,

    /// Extraction defaults
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Output settings
    #[serde(default)]
    pub export: ExportSettings,
}

/// Generation backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Ollama base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout in seconds; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// CourtListener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtListenerSettings {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Logo drawn on the PDF cover and header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
}

impl ClerkConfig {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clerk").join("config.toml"))
    }

    /// Load from `path`, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::load_from(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate().map_err(CliError::Config)?;
        if self.llm.endpoint.trim().is_empty() {
            return Err(CliError::Config("llm.endpoint must not be empty".into()));
        }
        if self.llm.model.trim().is_empty() {
            return Err(CliError::Config("llm.model must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

impl Default for CourtListenerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_endpoint() -> String {
    clerk_llm::ollama::DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    clerk_llm::ollama::DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    clerk_source::courtlistener::DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    clerk_source::courtlistener::DEFAULT_USER_AGENT.to_string()
}
