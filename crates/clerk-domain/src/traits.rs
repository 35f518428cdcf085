//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Sampling parameters forwarded to a text-generation backend
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingOptions {
    /// Sampling temperature (0.0 - 1.0)
    pub temperature: f64,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Optional stop sequences, in order
    pub stop: Option<Vec<String>>,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            max_tokens: 1500,
            stop: None,
        }
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (clerk-llm). Calls are blocking:
/// the pipeline is single-threaded and the backend call is its only
/// suspension point.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a non-streamed completion for `prompt`
    fn generate(&self, prompt: &str, options: &SamplingOptions) -> Result<String, Self::Error>;
}
