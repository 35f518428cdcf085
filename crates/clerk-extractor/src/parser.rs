//! Parse LLM output into brief sections
//!
//! Models wrap their JSON in prose, code fences, or both. Recovery is
//! best-effort: take everything from the first `{` to the last `}` and parse
//! that. Output with several JSON-like blocks is mis-extracted; that weakness
//! is accepted.

use crate::error::ExtractorError;
use clerk_domain::{ExtractedSections, Section};
use serde_json::Value;
use tracing::debug;

/// Locate the first brace-delimited object in `response` (greedy)
pub fn extract_json_object(response: &str) -> Result<&str, ExtractorError> {
    let start = response.find('{').ok_or(ExtractorError::NoJsonObject)?;
    let end = response.rfind('}').ok_or(ExtractorError::NoJsonObject)?;
    if end < start {
        return Err(ExtractorError::NoJsonObject);
    }
    Ok(&response[start..=end])
}

/// Parse a JSON object keyed by section titles
///
/// Missing sections are left absent. Present sections must be strings.
/// Unknown keys are ignored.
pub fn parse_sections(json_str: &str) -> Result<ExtractedSections, ExtractorError> {
    let json: Value = serde_json::from_str(json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| ExtractorError::InvalidFormat("Expected JSON object".to_string()))?;

    let mut sections = ExtractedSections::new();
    for section in Section::ALL {
        match obj.get(section.title()) {
            Some(Value::String(text)) => sections.insert(section, text.as_str()),
            Some(other) => {
                return Err(ExtractorError::InvalidFormat(format!(
                    "'{}' is not a string: {}",
                    section.title(),
                    other
                )))
            }
            None => debug!("Section '{}' missing from response", section.title()),
        }
    }

    Ok(sections)
}

/// Parse a raw model response into sections
pub fn parse_llm_response(response: &str) -> Result<ExtractedSections, ExtractorError> {
    parse_sections(extract_json_object(response)?)
}

/// First whitespace-delimited token of the case name, lowercased
pub(crate) fn case_keyword(case_name: &str) -> Option<String> {
    case_name.split_whitespace().next().map(str::to_lowercase)
}

/// Whether the generated sections mention the case at all
///
/// Joins every section and looks for the case-name keyword, ignoring case.
/// A tripwire against wholesale fabrication, not a fact-checker.
pub(crate) fn mentions_case(sections: &ExtractedSections, keyword: &str) -> bool {
    let combined = sections
        .iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    combined.contains(keyword)
}
