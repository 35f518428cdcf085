//! Core extraction client: one prompt, one parse, at most one retry

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::{case_keyword, mentions_case, parse_llm_response};
use crate::prompt::PromptBuilder;
use crate::types::GenerationRequest;
use clerk_domain::{ExtractedSections, LlmProvider, GENERIC_ERROR_SENTINEL, HALLUCINATION_SENTINEL};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// How an extraction ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStatus {
    /// Sections passed the identity check
    Succeeded,
    /// Both attempts failed the identity check
    Hallucinated,
    /// Transport, format or input failure
    Failed(String),
}

/// Outcome of [`BriefExtractor::extract_with_report`]
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Sections, sentinel-filled unless `status` is `Succeeded`
    pub sections: ExtractedSections,
    /// Backend invocations made (1 or 2)
    pub attempts: usize,
    /// Final state
    pub status: ExtractionStatus,
    /// Wall-clock time spent
    pub processing_time_ms: u64,
}

/// The Extractor turns opinion text into brief sections
pub struct BriefExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
}

impl<L> BriefExtractor<L>
where
    L: LlmProvider,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Create a new Extractor with default configuration
    pub fn with_defaults(llm_provider: L) -> Self {
        Self::new(llm_provider, ExtractorConfig::default())
    }

    /// Configuration in use
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the six sections of a brief
    ///
    /// Total: every failure is folded into sentinel values.
    pub fn extract(
        &self,
        request: GenerationRequest,
        case_name: &str,
        citation: &str,
    ) -> ExtractedSections {
        self.extract_with_report(request, case_name, citation).sections
    }

    /// Like [`extract`](Self::extract), also reporting attempts and status
    pub fn extract_with_report(
        &self,
        request: GenerationRequest,
        case_name: &str,
        citation: &str,
    ) -> ExtractionReport {
        let start = Instant::now();
        let request = GenerationRequest {
            retry: false,
            ..request
        };
        // The first attempt and its single derived retry; nothing else runs
        let attempts = [request.clone(), request.into_retry()];

        let mut made = 0;
        let mut status = ExtractionStatus::Failed("no attempt made".to_string());
        let mut sections = ExtractedSections::uniform(GENERIC_ERROR_SENTINEL);

        for attempt in &attempts {
            made += 1;
            match self.attempt(attempt, case_name, citation) {
                Ok(parsed) => {
                    info!("Brief sections generated on attempt {}", made);
                    status = ExtractionStatus::Succeeded;
                    sections = parsed;
                    break;
                }
                Err(ExtractorError::Hallucination { keyword }) if !attempt.retry => {
                    warn!(
                        "Hallucination detected on first try ('{}' not mentioned); retrying",
                        keyword
                    );
                }
                Err(ExtractorError::Hallucination { keyword }) => {
                    error!(
                        "Second attempt also failed: '{}' still not mentioned",
                        keyword
                    );
                    status = ExtractionStatus::Hallucinated;
                    sections = ExtractedSections::uniform(HALLUCINATION_SENTINEL);
                }
                Err(e) => {
                    error!("Error generating brief: {}", e);
                    status = ExtractionStatus::Failed(e.to_string());
                    break;
                }
            }
        }

        ExtractionReport {
            sections,
            attempts: made,
            status,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// One prompt → generate → parse → identity-check cycle
    fn attempt(
        &self,
        request: &GenerationRequest,
        case_name: &str,
        citation: &str,
    ) -> Result<ExtractedSections, ExtractorError> {
        let keyword = case_keyword(case_name).ok_or(ExtractorError::MissingCaseName)?;
        let text = self.bounded_text(&request.text);

        let prompt = PromptBuilder::new(text, case_name, citation, request.mode).build();
        debug!("Prompt length: {} chars (retry: {})", prompt.len(), request.retry);

        info!("Generating case brief (this may take a while)");
        let response = self
            .llm_provider
            .generate(&prompt, &request.sampling_options())
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;
        debug!("Raw LLM response: {}", response);

        let sections = parse_llm_response(&response)?;
        if !mentions_case(&sections, &keyword) {
            return Err(ExtractorError::Hallucination { keyword });
        }

        Ok(sections)
    }

    fn bounded_text<'t>(&self, text: &'t str) -> &'t str {
        let limit = self.config.max_text_length;
        match text.char_indices().nth(limit) {
            Some((cut, _)) => {
                warn!(
                    "Opinion text exceeds {} chars; truncating for the prompt",
                    limit
                );
                &text[..cut]
            }
            None => text,
        }
    }
}
