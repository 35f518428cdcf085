//! All-or-nothing validity check run immediately before export

use clerk_domain::{AssembledBrief, HALLUCINATION_SENTINEL};
use thiserror::Error;

/// Why a brief may not be exported
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The generator kept writing about some other case
    #[error("Brief generation failed due to hallucination in: {}", .fields.join(", "))]
    Hallucinated {
        /// Titles of the affected fields
        fields: Vec<String>,
    },

    /// Generation failed for another reason
    #[error("Brief generation failed in: {}", .fields.join(", "))]
    GenerationFailed {
        /// Titles of the affected fields
        fields: Vec<String>,
    },
}

/// Refuse any brief with an error sentinel in any field
///
/// Checked once, over the full field set, before any file is created.
pub fn validate_for_export(brief: &AssembledBrief) -> Result<(), GateError> {
    let flagged = brief.sentinel_fields();
    if flagged.is_empty() {
        return Ok(());
    }

    let hallucinated = flagged
        .iter()
        .any(|f| brief.get(*f).contains(HALLUCINATION_SENTINEL));
    let fields = flagged.iter().map(|f| f.title().to_string()).collect();

    if hallucinated {
        Err(GateError::Hallucinated { fields })
    } else {
        Err(GateError::GenerationFailed { fields })
    }
}
