//! Generation timestamp and disclosure attached to every exported brief

use chrono::Local;

/// Key of the generation note in flat and text output
pub const GENERATION_INFO_KEY: &str = "Generation Info";

/// Key of the disclosure in flat and text output
pub const DISCLOSURE_KEY: &str = "Disclosure";

/// Accuracy and liability disclosure, three paragraphs
pub const DISCLOSURE: &str = "This brief was generated with the assistance of an AI system trained to \
summarize legal opinions based on the provided court text. While efforts have been made to ensure \
accuracy, this document may contain errors, omissions, or hallucinated content.\n\n\
Users must not rely solely on this brief for legal decision-making, academic work, or court \
preparation. Always cross-check information against the original court opinion and consult with a \
licensed attorney if applicable.\n\n\
Use of this tool is at your own risk. No liability is assumed by the developer or contributors for \
any inaccuracies.";

/// Copyright notice closing the paginated layout
pub const COPYRIGHT_NOTICE: &str = "\u{a9} 2025 LexEmetica Clerk. All rights reserved.\n\
Unauthorized copying, reproduction, or distribution of this material, in whole or in part, without \
the prior written consent of LexEmetica Clerk is strictly prohibited.";

/// e.g. `June 13, 2025 at 04:07 PM (+02:00)`
const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p (%Z)";

/// When and by what a brief was generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    generated_at: String,
}

impl Provenance {
    /// Stamp with the current local time
    pub fn now() -> Self {
        Self {
            generated_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Stamp with a fixed, preformatted timestamp
    pub fn at(generated_at: impl Into<String>) -> Self {
        Self {
            generated_at: generated_at.into(),
        }
    }

    /// Formatted timestamp
    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    /// `Generated using LexEmetica Clerk on <timestamp>`
    pub fn generation_note(&self) -> String {
        format!("Generated using LexEmetica Clerk on {}", self.generated_at)
    }

    /// The disclosure text
    pub fn disclosure(&self) -> &'static str {
        DISCLOSURE
    }
}
