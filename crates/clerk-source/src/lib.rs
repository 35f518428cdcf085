//! Clerk input acquisition
//!
//! Produces the opinion text and its [`CaseMetadata`] from one of three
//! sources: a citation looked up on CourtListener, a local file, or raw text.
//! The metadata is returned as a value and threaded explicitly through the
//! rest of the pipeline.

#![warn(missing_docs)]

pub mod courtlistener;
mod error;
pub mod file;

use clerk_domain::CaseMetadata;
use std::path::PathBuf;
use tracing::info;

pub use courtlistener::CourtListenerClient;
pub use error::SourceError;

/// Where the opinion comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A reporter citation, e.g. "384 U.S. 436"
    Citation(String),
    /// A PDF or plain-text file
    File(PathBuf),
    /// Opinion text supplied directly
    RawText(String),
}

/// Opinion text plus whatever metadata the source could supply
#[derive(Debug, Clone)]
pub struct AcquiredInput {
    /// Case metadata, placeholders where unknown
    pub metadata: CaseMetadata,
    /// Full opinion text, not yet normalized
    pub text: String,
}

/// Anything that can resolve a citation into an opinion
pub trait CaseLookup {
    /// Look a citation up
    fn lookup(&self, citation: &str) -> Result<AcquiredInput, SourceError>;
}

/// Acquire the opinion for `source`
///
/// `lookup` is only consulted for [`InputSource::Citation`]; passing `None`
/// there is reported as [`SourceError::MissingApiKey`].
pub fn acquire(
    source: &InputSource,
    lookup: Option<&dyn CaseLookup>,
) -> Result<AcquiredInput, SourceError> {
    match source {
        InputSource::Citation(citation) => {
            if citation.trim().is_empty() {
                return Err(SourceError::NoInput);
            }
            let lookup = lookup.ok_or(SourceError::MissingApiKey)?;
            info!("Looking up citation '{}'", citation);
            lookup.lookup(citation.trim())
        }
        InputSource::File(path) => {
            info!("Reading opinion from {}", path.display());
            file::read_opinion(path)
        }
        InputSource::RawText(text) => {
            if text.trim().is_empty() {
                return Err(SourceError::NoInput);
            }
            Ok(AcquiredInput {
                metadata: CaseMetadata::default(),
                text: text.clone(),
            })
        }
    }
}
