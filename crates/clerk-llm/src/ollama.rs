//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API (`POST /api/generate`,
//! non-streaming).
//!
//! # Examples
//!
//! ```no_run
//! use clerk_llm::OllamaProvider;
//! use clerk_domain::{LlmProvider, SamplingOptions};
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "mixtral").unwrap();
//! let text = provider.generate("Say hello", &SamplingOptions::default()).unwrap();
//! ```

use crate::LlmError;
use clerk_domain::{LlmProvider, SamplingOptions};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "mixtral";

/// Ollama API provider for local LLM inference
///
/// Requests are blocking and, unless [`with_timeout`](Self::with_timeout) is
/// used, carry no client-side timeout: generation over a full opinion can take
/// many minutes.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    timeout: Option<Duration>,
    client: reqwest::blocking::Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions<'a>,
}

/// Sampling options in Ollama's vocabulary
#[derive(Serialize)]
struct OllamaOptions<'a> {
    temperature: f64,
    num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "mixtral", "llama3")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::build(endpoint.into(), model.into(), None)
    }

    /// Create a new Ollama provider on the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Bound every request by `timeout`
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, LlmError> {
        Self::build(self.endpoint, self.model, Some(timeout))
    }

    /// Model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build(endpoint: String, model: String, timeout: Option<Duration>) -> Result<Self, LlmError> {
        // The blocking client defaults to a 30s timeout; clear it unless asked
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            timeout,
            client,
        })
    }

    fn request_body<'a>(
        &'a self,
        prompt: &'a str,
        options: &'a SamplingOptions,
    ) -> OllamaGenerateRequest<'a> {
        OllamaGenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature: options.temperature,
                num_predict: options.max_tokens,
                stop: options.stop.as_deref(),
            },
        }
    }
}

impl LlmProvider for OllamaProvider {
    type Error = LlmError;

    /// Generate text using the Ollama API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - Network communication fails
    /// - Response format is invalid
    fn generate(&self, prompt: &str, options: &SamplingOptions) -> Result<String, Self::Error> {
        let url = format!("{}/api/generate", self.endpoint);
        debug!(
            "POST {} (model {}, prompt {} chars, timeout {:?})",
            url,
            self.model,
            prompt.len(),
            self.timeout
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(prompt, options))
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body = response
            .json::<OllamaGenerateResponse>()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Ok(body.response)
    }
}
