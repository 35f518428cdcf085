//! Merge generated sections with case metadata into the final brief

use clerk_domain::metadata::{
    UNKNOWN_CASE_NAME, UNKNOWN_CITATION, UNKNOWN_COURT, UNKNOWN_DATE, UNKNOWN_DOCKET,
    UNKNOWN_PERSON, UNKNOWN_TEXT, UNKNOWN_URL,
};
use clerk_domain::{AssembledBrief, CaseMetadata, ExtractedSections, Section, SECTION_PLACEHOLDER};

/// Assemble the final brief
///
/// Identifier and context fields come from `metadata`, with a placeholder for
/// any blank value. Each substantive section takes the generated text when
/// present and non-blank; Disposition alone falls back to the metadata's
/// disposition before the placeholder. Sentinel values pass through untouched
/// and must be caught by [`validate_for_export`](crate::validate_for_export).
pub fn assemble(sections: &ExtractedSections, metadata: &CaseMetadata) -> AssembledBrief {
    let section = |s: Section| -> String {
        let fallback = match s {
            Section::Disposition => non_blank(&metadata.disposition),
            _ => None,
        };
        sections
            .get(s)
            .and_then(non_blank)
            .or(fallback)
            .unwrap_or(SECTION_PLACEHOLDER)
            .to_string()
    };

    AssembledBrief::from_values([
        // Identifiers
        or_placeholder(&metadata.case_name, UNKNOWN_CASE_NAME),
        or_placeholder(&metadata.citation, UNKNOWN_CITATION),
        or_placeholder(&metadata.date_filed, UNKNOWN_DATE),
        or_placeholder(&metadata.docket_number, UNKNOWN_DOCKET),
        // Context
        or_placeholder(&metadata.court, UNKNOWN_COURT),
        or_placeholder(&metadata.source_url, UNKNOWN_URL),
        or_placeholder(&metadata.judges, UNKNOWN_PERSON),
        or_placeholder(&metadata.procedural_history, UNKNOWN_TEXT),
        or_placeholder(&metadata.attorneys, UNKNOWN_TEXT),
        // Substance
        section(Section::Facts),
        section(Section::Issue),
        section(Section::RuleOfLaw),
        section(Section::HoldingAndReasoning),
        section(Section::Disposition),
        section(Section::Dissent),
    ])
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    non_blank(value).unwrap_or(placeholder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clerk_domain::{BriefField, HALLUCINATION_SENTINEL};

    fn disposition(brief: &AssembledBrief) -> &str {
        brief.get(BriefField::Section(Section::Disposition))
    }

    #[test]
    fn test_generated_value_wins() {
        let sections = ExtractedSections::new().with(Section::Disposition, "Reversed.");
        let metadata = CaseMetadata {
            disposition: "Affirmed".to_string(),
            ..CaseMetadata::default()
        };
        assert_eq!(disposition(&assemble(&sections, &metadata)), "Reversed.");
    }

    #[test]
    fn test_disposition_falls_back_to_metadata() {
        let sections = ExtractedSections::new().with(Section::Disposition, "");
        let metadata = CaseMetadata {
            disposition: "Affirmed".to_string(),
            ..CaseMetadata::default()
        };
        assert_eq!(disposition(&assemble(&sections, &metadata)), "Affirmed");
    }

    #[test]
    fn test_disposition_placeholder_when_both_empty() {
        let sections = ExtractedSections::new();
        let metadata = CaseMetadata {
            disposition: String::new(),
            ..CaseMetadata::default()
        };
        assert_eq!(
            disposition(&assemble(&sections, &metadata)),
            SECTION_PLACEHOLDER
        );
    }

    #[test]
    fn test_other_sections_have_no_metadata_fallback() {
        let metadata = CaseMetadata {
            disposition: "Affirmed".to_string(),
            ..CaseMetadata::default()
        };
        let brief = assemble(&ExtractedSections::new(), &metadata);
        for s in [Section::Facts, Section::Issue, Section::RuleOfLaw, Section::Dissent] {
            assert_eq!(brief.get(BriefField::Section(s)), SECTION_PLACEHOLDER);
        }
    }

    #[test]
    fn test_metadata_fields_and_placeholders() {
        let metadata = CaseMetadata {
            case_name: "Gideon v. Wainwright".to_string(),
            court: "  ".to_string(),
            ..CaseMetadata::default()
        };
        let brief = assemble(&ExtractedSections::new(), &metadata);
        assert_eq!(brief.case_name(), "Gideon v. Wainwright");
        assert_eq!(brief.get(BriefField::Court), UNKNOWN_COURT);
        assert_eq!(brief.get(BriefField::DocketNumber), UNKNOWN_DOCKET);
        assert_eq!(brief.len(), 15);
    }

    #[test]
    fn test_sentinels_pass_through() {
        let sections = ExtractedSections::uniform(HALLUCINATION_SENTINEL);
        let brief = assemble(&sections, &CaseMetadata::default());
        assert_eq!(brief.sentinel_fields().len(), 6);
    }
}
