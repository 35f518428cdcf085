//! Clerk Domain Layer
//!
//! Core vocabulary of the case-brief pipeline. This crate has ZERO external
//! dependencies and defines the value types and trait interfaces that every
//! other layer depends upon.
//!
//! ## Key Concepts
//!
//! - **Section**: one of the six substantive parts of a brief
//! - **CaseMetadata**: identifying/contextual facts about an opinion, supplied
//!   by the input-acquisition layer and threaded explicitly through the pipeline
//! - **ExtractedSections**: the generator's output, possibly sentinel-filled
//! - **AssembledBrief**: the ordered, final field set handed to an exporter
//! - **Sentinel**: a marker string meaning "generation failed"
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure data and small pure helpers only
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod brief;
pub mod metadata;
pub mod mode;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use brief::{
    contains_error_sentinel, AssembledBrief, BriefField, ExtractedSections, GENERIC_ERROR_SENTINEL,
    HALLUCINATION_SENTINEL, SECTION_PLACEHOLDER,
};
pub use metadata::CaseMetadata;
pub use mode::WritingMode;
pub use section::Section;
pub use traits::{LlmProvider, SamplingOptions};
