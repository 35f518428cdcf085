//! Request types for extraction

use crate::config::{ExtractorConfig, MAX_TEMPERATURE, MIN_TEMPERATURE};
use crate::error::ExtractorError;
use clerk_domain::{SamplingOptions, WritingMode};

/// One generation attempt's worth of input
///
/// A failed identity check derives exactly one retry request via
/// [`into_retry`](Self::into_retry); it is otherwise identical.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Normalized opinion text
    pub text: String,

    /// Writing mode for the generated prose
    pub mode: WritingMode,

    /// Sampling temperature (0.0 - 1.0)
    pub temperature: f64,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Optional stop sequences
    pub stop: Option<Vec<String>>,

    /// Whether this is the retry attempt
    pub retry: bool,
}

impl GenerationRequest {
    /// Create a first-attempt request with default sampling parameters
    pub fn new(text: impl Into<String>, mode: WritingMode) -> Self {
        Self::from_config(text, mode, &ExtractorConfig::default())
    }

    /// Create a first-attempt request using a config's defaults
    pub fn from_config(
        text: impl Into<String>,
        mode: WritingMode,
        config: &ExtractorConfig,
    ) -> Self {
        Self {
            text: text.into(),
            mode,
            temperature: config.default_temperature,
            max_tokens: config.default_max_tokens,
            stop: None,
            retry: false,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum generation length
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set stop sequences; an empty list means none
    pub fn with_stop(mut self, stop: Option<Vec<String>>) -> Self {
        self.stop = stop.filter(|s| !s.is_empty());
        self
    }

    /// The derived retry request
    pub fn into_retry(self) -> Self {
        Self {
            retry: true,
            ..self
        }
    }

    /// Sampling parameters for the backend
    pub fn sampling_options(&self) -> SamplingOptions {
        SamplingOptions {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stop: self.stop.clone(),
        }
    }

    /// Check the sampling parameters are in range
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&self.temperature) {
            return Err(ExtractorError::Config(format!(
                "temperature {} outside {}..={}",
                self.temperature, MIN_TEMPERATURE, MAX_TEMPERATURE
            )));
        }
        if self.max_tokens == 0 {
            return Err(ExtractorError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_only_flips_flag() {
        let first = GenerationRequest::new("text", WritingMode::Student)
            .with_temperature(0.5)
            .with_stop(Some(vec!["###".to_string()]));
        let retry = first.clone().into_retry();

        assert!(!first.retry);
        assert!(retry.retry);
        assert_eq!(GenerationRequest { retry: false, ..retry }, first);
    }

    #[test]
    fn test_empty_stop_list_is_none() {
        let request = GenerationRequest::new("t", WritingMode::Student).with_stop(Some(vec![]));
        assert_eq!(request.stop, None);
    }

    #[test]
    fn test_validate() {
        let request = GenerationRequest::new("t", WritingMode::Student);
        assert!(request.validate().is_ok());
        assert!(request.clone().with_temperature(-0.1).validate().is_err());
        assert!(request.with_max_tokens(0).validate().is_err());
    }
}
