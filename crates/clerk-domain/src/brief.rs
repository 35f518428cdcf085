//! Brief value types: generated sections and the assembled field set

use crate::metadata::filing_year;
use crate::section::Section;
use std::collections::BTreeMap;

/// Sentinel written into every section when generation failed outright
pub const GENERIC_ERROR_SENTINEL: &str = "[ERROR]";

/// Sentinel written into every section when both attempts looked fabricated
pub const HALLUCINATION_SENTINEL: &str = "[ERROR: hallucination]";

/// Placeholder for a substantive section with no content
pub const SECTION_PLACEHOLDER: &str = "...";

/// Marker shared by every error sentinel
const SENTINEL_MARKER: &str = "[ERROR";

/// Whether `value` carries an error sentinel
pub fn contains_error_sentinel(value: &str) -> bool {
    value.contains(SENTINEL_MARKER)
}

/// Sections produced by the generator, keyed by [`Section`]
///
/// A section may be absent when the generator omitted its key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedSections {
    values: BTreeMap<Section, String>,
}

impl ExtractedSections {
    /// Empty set of sections
    pub fn new() -> Self {
        Self::default()
    }

    /// All six sections set to the same value (used for sentinels)
    pub fn uniform(value: &str) -> Self {
        Self {
            values: Section::ALL
                .into_iter()
                .map(|s| (s, value.to_string()))
                .collect(),
        }
    }

    /// Set a section's text
    pub fn insert(&mut self, section: Section, text: impl Into<String>) {
        self.values.insert(section, text.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, section: Section, text: impl Into<String>) -> Self {
        self.insert(section, text);
        self
    }

    /// Text of a section, if the generator produced one
    pub fn get(&self, section: Section) -> Option<&str> {
        self.values.get(&section).map(String::as_str)
    }

    /// Present sections in [`Section::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|v| (s, v)))
    }

    /// Number of present sections
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no section is present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether all six sections equal `sentinel`
    pub fn is_uniformly(&self, sentinel: &str) -> bool {
        Section::ALL.iter().all(|s| self.get(*s) == Some(sentinel))
    }
}

/// A field of the assembled brief
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BriefField {
    /// Case caption
    CaseName,
    /// Reporter citation
    Citation,
    /// Filing date
    DateFiled,
    /// Docket number
    DocketNumber,
    /// Court
    Court,
    /// Source URL
    SourceUrl,
    /// Judges
    Judges,
    /// Procedural history
    ProceduralHistory,
    /// Attorneys
    Attorneys,
    /// One of the six substantive sections
    Section(Section),
}

impl BriefField {
    /// Canonical field order: identifiers, context, then substance
    pub const ORDER: [BriefField; 15] = [
        BriefField::CaseName,
        BriefField::Citation,
        BriefField::DateFiled,
        BriefField::DocketNumber,
        BriefField::Court,
        BriefField::SourceUrl,
        BriefField::Judges,
        BriefField::ProceduralHistory,
        BriefField::Attorneys,
        BriefField::Section(Section::Facts),
        BriefField::Section(Section::Issue),
        BriefField::Section(Section::RuleOfLaw),
        BriefField::Section(Section::HoldingAndReasoning),
        BriefField::Section(Section::Disposition),
        BriefField::Section(Section::Dissent),
    ];

    /// Display title / serialized key of the field
    pub fn title(&self) -> &'static str {
        match self {
            BriefField::CaseName => "Case Name",
            BriefField::Citation => "Citation",
            BriefField::DateFiled => "Date Filed",
            BriefField::DocketNumber => "Docket Number",
            BriefField::Court => "Court",
            BriefField::SourceUrl => "Source URL",
            BriefField::Judges => "Judges",
            BriefField::ProceduralHistory => "Procedural History",
            BriefField::Attorneys => "Attorneys",
            BriefField::Section(section) => section.title(),
        }
    }
}

/// The final, ordered field set of a brief
///
/// Built once per run by the assembler and never mutated afterwards. Exporters
/// read it; provenance fields are added to their own copies only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledBrief {
    entries: Vec<(BriefField, String)>,
}

impl AssembledBrief {
    /// Build a brief from values listed in [`BriefField::ORDER`] order
    pub fn from_values(values: [String; 15]) -> Self {
        Self {
            entries: BriefField::ORDER.into_iter().zip(values).collect(),
        }
    }

    /// Value of a field
    pub fn get(&self, field: BriefField) -> &str {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }

    /// Fields and values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BriefField, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the brief has no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case caption
    pub fn case_name(&self) -> &str {
        self.get(BriefField::CaseName)
    }

    /// `"<name> (<year>)"`
    pub fn title(&self) -> String {
        format!(
            "{} ({})",
            self.case_name(),
            filing_year(self.get(BriefField::DateFiled))
        )
    }

    /// Fields whose value carries an error sentinel
    pub fn sentinel_fields(&self) -> Vec<BriefField> {
        self.iter()
            .filter(|(_, v)| contains_error_sentinel(v))
            .map(|(f, _)| f)
            .collect()
    }
}
