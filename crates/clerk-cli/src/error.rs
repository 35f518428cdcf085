//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit status for a brief refused by the export gate.
pub const EXIT_GATED: i32 = 2;

/// Process exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input acquisition error
    #[error("{0}")]
    Source(#[from] clerk_source::SourceError),

    /// Generation backend setup error
    #[error("LLM error: {0}")]
    Llm(#[from] clerk_llm::LlmError),

    /// Invalid generation parameters
    #[error("{0}")]
    Extractor(#[from] clerk_extractor::ExtractorError),

    /// The brief carries error sentinels
    #[error("{0}")]
    Gate(#[from] clerk_extractor::GateError),

    /// Writing the brief failed
    #[error("Export error: {0}")]
    Export(#[from] clerk_export::ExportError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CliError {
    /// Exit status reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Gate(_) => EXIT_GATED,
            _ => EXIT_FAILURE,
        }
    }
}
