//! Case metadata supplied by the input-acquisition layer

/// Placeholder case name used when no metadata is available
pub const UNKNOWN_CASE_NAME: &str = "Sample Case";
/// Placeholder citation
pub const UNKNOWN_CITATION: &str = "Sample Citation";
/// Placeholder filing date
pub const UNKNOWN_DATE: &str = "Unknown Date";
/// Placeholder docket number
pub const UNKNOWN_DOCKET: &str = "—";
/// Placeholder court
pub const UNKNOWN_COURT: &str = "Unknown Court";
/// Placeholder for people-valued fields (judges, author)
pub const UNKNOWN_PERSON: &str = "Unknown";
/// Placeholder for the source URL
pub const UNKNOWN_URL: &str = "N/A";
/// Placeholder for free-text metadata fields
pub const UNKNOWN_TEXT: &str = "...";

/// Identifying and contextual facts about an opinion
///
/// Constructed once per run by the input-acquisition layer and passed by
/// reference to every later stage. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseMetadata {
    /// Case caption, e.g. "Miranda v. Arizona"
    pub case_name: String,
    /// Reporter citation, e.g. "384 U.S. 436"
    pub citation: String,
    /// Filing date, usually `YYYY-MM-DD`
    pub date_filed: String,
    /// Docket number
    pub docket_number: String,
    /// Court identifier
    pub court: String,
    /// Judges on the panel
    pub judges: String,
    /// Author of the lead opinion
    pub opinion_author: String,
    /// Procedural history as reported by the source
    pub procedural_history: String,
    /// Counsel of record
    pub attorneys: String,
    /// Disposition as reported by the source
    pub disposition: String,
    /// Where the opinion came from
    pub source_url: String,
}

impl Default for CaseMetadata {
    fn default() -> Self {
        Self {
            case_name: UNKNOWN_CASE_NAME.to_string(),
            citation: UNKNOWN_CITATION.to_string(),
            date_filed: UNKNOWN_DATE.to_string(),
            docket_number: UNKNOWN_DOCKET.to_string(),
            court: UNKNOWN_COURT.to_string(),
            judges: UNKNOWN_PERSON.to_string(),
            opinion_author: UNKNOWN_PERSON.to_string(),
            procedural_history: UNKNOWN_TEXT.to_string(),
            attorneys: UNKNOWN_TEXT.to_string(),
            disposition: UNKNOWN_TEXT.to_string(),
            source_url: UNKNOWN_URL.to_string(),
        }
    }
}

impl CaseMetadata {
    /// Placeholder metadata pointing at a local source
    pub fn with_source_url(url: impl Into<String>) -> Self {
        Self {
            source_url: url.into(),
            ..Self::default()
        }
    }

    /// Year of the filing date (`"1966"` for `"1966-06-13"`)
    ///
    /// Dates without a dash are returned whole.
    pub fn filing_year(&self) -> &str {
        filing_year(&self.date_filed)
    }
}

/// Year portion of a `YYYY-MM-DD` style date string
pub fn filing_year(date: &str) -> &str {
    match date.split_once('-') {
        Some((year, _)) => year,
        None => date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_placeholders() {
        let meta = CaseMetadata::default();
        assert_eq!(meta.case_name, UNKNOWN_CASE_NAME);
        assert_eq!(meta.court, UNKNOWN_COURT);
        assert_eq!(meta.source_url, UNKNOWN_URL);
    }

    #[test]
    fn test_filing_year() {
        assert_eq!(filing_year("1966-06-13"), "1966");
        assert_eq!(filing_year("Unknown Date"), "Unknown Date");
        assert_eq!(filing_year(""), "");
    }

    #[test]
    fn test_with_source_url() {
        let meta = CaseMetadata::with_source_url("file:///tmp/op.pdf");
        assert_eq!(meta.source_url, "file:///tmp/op.pdf");
        assert_eq!(meta.citation, UNKNOWN_CITATION);
    }
}
