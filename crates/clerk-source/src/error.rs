//! Error types for input acquisition

use thiserror::Error;

/// Input acquisition errors
///
/// All of these stop the pipeline before any generation work begins.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No usable input was supplied
    #[error("No input provided")]
    NoInput,

    /// A citation lookup was requested without a credential
    #[error("No CourtListener API key (set CL_API_KEY or pass --api-key)")]
    MissingApiKey,

    /// Citation lookup failed at the HTTP layer
    #[error("Error fetching case: {0}")]
    Lookup(String),

    /// The lookup service knows no case for this citation
    #[error("No case found for citation '{0}'")]
    NotFound(String),

    /// The service answered with an unexpected shape
    #[error("Unexpected lookup response: {0}")]
    InvalidResponse(String),

    /// The opinion has no usable text
    #[error("No full text available for {0}")]
    MissingText(String),

    /// Reading an input file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing an input PDF failed
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) if status == reqwest::StatusCode::UNAUTHORIZED => {
                SourceError::Lookup(format!("HTTP {}: check the API key", status))
            }
            Some(status) => SourceError::Lookup(format!("HTTP {}: {}", status, e)),
            None => SourceError::Lookup(e.to_string()),
        }
    }
}
