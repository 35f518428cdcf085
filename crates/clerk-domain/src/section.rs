//! Section module - the six substantive parts of a case brief

/// A substantive section of a case brief
///
/// The set is closed: every brief carries exactly these six sections, and the
/// generator is asked to return a JSON object keyed by their titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// How the court disposed of the case (affirmed, reversed, ...)
    Disposition,

    /// The legal rule the case stands for
    RuleOfLaw,

    /// Material facts of the dispute
    Facts,

    /// The question presented to the court
    Issue,

    /// The court's answer and its reasoning
    HoldingAndReasoning,

    /// Dissenting opinions, if any
    Dissent,
}

impl Section {
    /// All sections, in the order the generator is asked to produce them
    pub const ALL: [Section; 6] = [
        Section::Disposition,
        Section::RuleOfLaw,
        Section::Facts,
        Section::Issue,
        Section::HoldingAndReasoning,
        Section::Dissent,
    ];

    /// JSON key / display title of the section
    pub fn title(&self) -> &'static str {
        match self {
            Section::Disposition => "Disposition",
            Section::RuleOfLaw => "Rule of Law",
            Section::Facts => "Facts",
            Section::Issue => "Issue",
            Section::HoldingAndReasoning => "Holding & Reasoning",
            Section::Dissent => "Dissent",
        }
    }

    /// Look a section up by its exact title
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.title() == title)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
