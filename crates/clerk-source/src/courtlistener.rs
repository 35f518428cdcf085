//! CourtListener citation lookup
//!
//! `POST /api/rest/v4/citation-lookup/` resolves a citation to opinion
//! clusters; the first cluster's first sub-opinion supplies the text.

use crate::error::SourceError;
use crate::{AcquiredInput, CaseLookup};
use clerk_domain::metadata::{
    UNKNOWN_CASE_NAME, UNKNOWN_COURT, UNKNOWN_DATE, UNKNOWN_DOCKET, UNKNOWN_PERSON, UNKNOWN_TEXT,
};
use clerk_domain::CaseMetadata;
use regex::Regex;
use serde_json::{json, Value};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Default CourtListener base URL
pub const DEFAULT_BASE_URL: &str = "https://www.courtlistener.com";

/// Default User-Agent sent with lookups
pub const DEFAULT_USER_AGENT: &str = "LexEmetica Clerk/1.0 (academic use)";

const LOOKUP_PATH: &str = "/api/rest/v4/citation-lookup/";

/// Opinion text fields, in order of preference
const TEXT_FIELDS: [&str; 3] = ["plain_text", "html_with_citations", "html"];

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid html tag regex"));

/// Blocking CourtListener REST client
pub struct CourtListenerClient {
    base_url: String,
    api_key: String,
    user_agent: String,
    client: reqwest::blocking::Client,
}

impl CourtListenerClient {
    /// Create a client for `base_url` authenticated with `api_key`
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SourceError::MissingApiKey);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| SourceError::Lookup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            user_agent: user_agent.into(),
            client,
        })
    }

    fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        debug!("GET {}", url);
        let value = self
            .client
            .get(url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("User-Agent", &self.user_agent)
            .send()?
            .error_for_status()?
            .json::<Value>()?;
        Ok(value)
    }
}

impl CaseLookup for CourtListenerClient {
    fn lookup(&self, citation: &str) -> Result<AcquiredInput, SourceError> {
        let url = format!("{}{}", self.base_url, LOOKUP_PATH);
        debug!("POST {}", url);

        let results: Value = self
            .client
            .post(&url)
            .header("Authorization", format!("Token {}", self.api_key))
            .header("User-Agent", &self.user_agent)
            .json(&json!({ "text": citation }))
            .send()?
            .error_for_status()?
            .json()?;

        let cluster =
            first_cluster(&results).ok_or_else(|| SourceError::NotFound(citation.to_string()))?;
        let opinion_url = cluster
            .get("sub_opinions")
            .and_then(|v| v.get(0))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SourceError::InvalidResponse("cluster has no sub_opinions".to_string())
            })?;

        let opinion = self.get_json(opinion_url)?;
        let metadata = metadata_from(cluster, &opinion, citation, &self.base_url);
        let text = opinion_text(&opinion)
            .ok_or_else(|| SourceError::MissingText(metadata.case_name.clone()))?;

        Ok(AcquiredInput { metadata, text })
    }
}

/// `results[0].clusters[0]`
pub(crate) fn first_cluster(results: &Value) -> Option<&Value> {
    results.get(0)?.get("clusters")?.get(0)
}

/// Map a cluster and its opinion onto [`CaseMetadata`]
pub(crate) fn metadata_from(
    cluster: &Value,
    opinion: &Value,
    citation: &str,
    base_url: &str,
) -> CaseMetadata {
    let field = |v: &Value, keys: &[&str], default: &str| -> String {
        keys.iter()
            .filter_map(|k| v.get(*k))
            .find_map(|x| match x {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| default.to_string())
    };

    let source_url = match cluster.get("absolute_url").and_then(Value::as_str) {
        Some(path) if path.starts_with("http") => path.to_string(),
        Some(path) => format!("{}{}", base_url, path),
        None => base_url.to_string(),
    };

    CaseMetadata {
        case_name: field(cluster, &["case_name", "case_name_full"], UNKNOWN_CASE_NAME),
        citation: citation.to_string(),
        date_filed: field(cluster, &["date_filed"], UNKNOWN_DATE),
        docket_number: field(cluster, &["docket_number", "docketNumber"], UNKNOWN_DOCKET),
        court: field(cluster, &["court_id", "court"], UNKNOWN_COURT),
        judges: field(cluster, &["judges"], UNKNOWN_PERSON),
        opinion_author: field(opinion, &["author_str", "author"], UNKNOWN_PERSON),
        procedural_history: field(cluster, &["procedural_history"], UNKNOWN_TEXT),
        attorneys: field(cluster, &["attorneys"], UNKNOWN_TEXT),
        disposition: field(cluster, &["disposition"], UNKNOWN_TEXT),
        source_url,
    }
}

/// Best available opinion text; HTML variants are stripped of tags
pub(crate) fn opinion_text(opinion: &Value) -> Option<String> {
    TEXT_FIELDS.iter().find_map(|key| {
        let raw = opinion.get(*key)?.as_str()?;
        let text = if *key == "plain_text" {
            raw.to_string()
        } else {
            HTML_TAG.replace_all(raw, " ").into_owned()
        };
        (!text.trim().is_empty()).then_some(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_fixture() -> Value {
        json!([{
            "citation": "384 U.S. 436",
            "status": 200,
            "clusters": [{
                "case_name": "Miranda v. Arizona",
                "date_filed": "1966-06-13",
                "absolute_url": "/opinion/107252/miranda-v-arizona/",
                "judges": "Warren, Black, Douglas",
                "procedural_history": "",
                "attorneys": "John J. Flynn argued the cause for petitioner",
                "disposition": "Reversed",
                "court_id": "scotus",
                "sub_opinions": ["https://www.courtlistener.com/api/rest/v4/opinions/107252/"]
            }]
        }])
    }

    #[test]
    fn test_first_cluster() {
        let results = lookup_fixture();
        let cluster = first_cluster(&results).unwrap();
        assert_eq!(cluster["case_name"], "Miranda v. Arizona");
        assert!(first_cluster(&json!([])).is_none());
        assert!(first_cluster(&json!([{"clusters": []}])).is_none());
    }

    #[test]
    fn test_metadata_mapping() {
        let results = lookup_fixture();
        let cluster = first_cluster(&results).unwrap();
        let opinion = json!({"author_str": "Warren", "plain_text": "text"});

        let meta = metadata_from(cluster, &opinion, "384 U.S. 436", DEFAULT_BASE_URL);
        assert_eq!(meta.case_name, "Miranda v. Arizona");
        assert_eq!(meta.date_filed, "1966-06-13");
        assert_eq!(meta.court, "scotus");
        assert_eq!(meta.opinion_author, "Warren");
        assert_eq!(meta.disposition, "Reversed");
        assert_eq!(meta.docket_number, UNKNOWN_DOCKET);
        assert_eq!(
            meta.source_url,
            "https://www.courtlistener.com/opinion/107252/miranda-v-arizona/"
        );
        // Blank upstream values survive here; the assembler substitutes placeholders
        assert_eq!(meta.procedural_history, "");
    }

    #[test]
    fn test_opinion_text_prefers_plain_text() {
        let opinion = json!({"plain_text": "Plain.", "html": "<p>Html.</p>"});
        assert_eq!(opinion_text(&opinion).unwrap(), "Plain.");
    }

    #[test]
    fn test_opinion_text_falls_back_to_stripped_html() {
        let opinion = json!({
            "plain_text": "  ",
            "html_with_citations": "<p>Held <i>unconstitutional</i>.</p>"
        });
        let text = opinion_text(&opinion).unwrap();
        assert!(!text.contains('<'));
        assert!(text.contains("Held"));
        assert!(text.contains("unconstitutional"));
    }

    #[test]
    fn test_opinion_text_missing() {
        assert!(opinion_text(&json!({"plain_text": ""})).is_none());
    }

    #[test]
    fn test_client_requires_key() {
        let result = CourtListenerClient::new(DEFAULT_BASE_URL, " ", DEFAULT_USER_AGENT);
        assert!(matches!(result, Err(SourceError::MissingApiKey)));
    }
}
