//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during a single extraction attempt
///
/// None of these escape [`BriefExtractor::extract`](crate::BriefExtractor::extract);
/// they are converted into sentinel sections there.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error (network, backend)
    #[error("LLM error: {0}")]
    Llm(String),

    /// The response contained no brace-delimited object
    #[error("No JSON object found in model response")]
    NoJsonObject,

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Valid JSON of the wrong shape
    #[error("Invalid section format: {0}")]
    InvalidFormat(String),

    /// The sections never mention the case
    #[error("Hallucination detected: '{keyword}' not found in generated sections")]
    Hallucination {
        /// Case-name keyword that was looked for
        keyword: String,
    },

    /// The case name is empty, so the identity check cannot run
    #[error("Case name is empty")]
    MissingCaseName,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        ExtractorError::JsonParse(e.to_string())
    }
}
