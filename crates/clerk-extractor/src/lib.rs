//! Clerk Extractor
//!
//! Turns the full text of a court opinion into the six substantive sections of
//! a case brief using an LLM, and assembles the final brief.
//!
//! # Architecture
//!
//! ```text
//! raw text → normalize → BriefExtractor → LLM → parse → identity check
//!                              ↑______ one retry ______|
//!          → assemble(sections, metadata) → validate_for_export → exporter
//! ```
//!
//! # Key Features
//!
//! - **Normalization**: repairs line-wrap and pagination artifacts of extracted text
//! - **Prompt Engineering**: per-mode instructions that pin the model to one case
//! - **Best-effort JSON recovery**: pulls one JSON object out of free-form output
//! - **Hallucination tripwire**: a coarse case-identity check with a single retry
//! - **Total extraction**: failures become sentinel values, never panics or errors
//! - **Export gate**: sentinel-carrying briefs are refused before any write
//!
//! # Example Usage
//!
//! ```
//! use clerk_extractor::{assemble, normalize, validate_for_export, BriefExtractor, GenerationRequest};
//! use clerk_domain::{CaseMetadata, WritingMode};
//! use clerk_llm::MockProvider;
//!
//! let llm = MockProvider::new(r#"{
//!     "Disposition": "Affirmed.", "Rule of Law": "Miranda warnings are required.",
//!     "Facts": "Miranda was arrested.", "Issue": "Must police warn suspects?",
//!     "Holding & Reasoning": "Yes.", "Dissent": "Harlan dissented."
//! }"#);
//! let extractor = BriefExtractor::with_defaults(llm);
//!
//! let mut metadata = CaseMetadata::default();
//! metadata.case_name = "Miranda v. Arizona".to_string();
//!
//! let text = normalize("The petitioner Miranda\nwas arrested *436 in Phoenix.");
//! let request = GenerationRequest::new(text, WritingMode::Professional);
//! let sections = extractor.extract(request, &metadata.case_name, &metadata.citation);
//!
//! let brief = assemble(&sections, &metadata);
//! assert!(validate_for_export(&brief).is_ok());
//! ```

#![warn(missing_docs)]

mod assembler;
mod config;
mod error;
mod extractor;
mod gate;
mod normalize;
mod parser;
mod prompt;
mod types;


pub use assembler::assemble;
pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::{BriefExtractor, ExtractionReport, ExtractionStatus};
pub use gate::{validate_for_export, GateError};
pub use normalize::normalize;
pub use parser::{extract_json_object, parse_sections};
pub use prompt::PromptBuilder;
pub use types::GenerationRequest;
