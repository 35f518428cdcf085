//! Clerk LLM Provider Layer
//!
//! Pluggable text-generation backends behind the `LlmProvider` trait from
//! `clerk-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, scripted mock for testing
//! - `OllamaProvider`: Local Ollama API integration
//!
//! # Examples
//!
//! ```
//! use clerk_llm::MockProvider;
//! use clerk_domain::{LlmProvider, SamplingOptions};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt", &SamplingOptions::default()).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod ollama;

use clerk_domain::{LlmProvider, SamplingOptions};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::OllamaProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// One scripted reply of a [`MockProvider`]
#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns scripted replies in order, then falls back to a fixed default. No
/// network calls are made. Clones share the script and the call log.
///
/// # Examples
///
/// ```
/// use clerk_llm::MockProvider;
/// use clerk_domain::{LlmProvider, SamplingOptions};
///
/// let opts = SamplingOptions::default();
/// let provider = MockProvider::new("fallback")
///     .then_reply("first")
///     .then_fail("backend down");
///
/// assert_eq!(provider.generate("p", &opts).unwrap(), "first");
/// assert!(provider.generate("p", &opts).is_err());
/// assert_eq!(provider.generate("p", &opts).unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<Mutex<Vec<(String, SamplingOptions)>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply to be returned before the default
    pub fn then_reply(self, response: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Reply(response.into()));
        self
    }

    /// Queue a failure to be returned before the default
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.into()));
        self
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Prompts and options received so far
    pub fn calls(&self) -> Vec<(String, SamplingOptions)> {
        self.calls.lock().unwrap().clone()
    }

    /// Reset the call log
    pub fn reset_call_count(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str, options: &SamplingOptions) -> Result<String, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Reply(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(LlmError::Communication(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
