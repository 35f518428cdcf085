//! File-based opinion input

use crate::error::SourceError;
use crate::AcquiredInput;
use clerk_domain::CaseMetadata;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read an opinion from a PDF or text file
///
/// PDFs are text-extracted page by page; anything else is read as UTF-8.
/// Metadata is placeholder-only apart from a `file://` source URL.
pub fn read_opinion(path: &Path) -> Result<AcquiredInput, SourceError> {
    let text = if is_pdf(path) {
        extract_pdf_text(path)?
    } else {
        fs::read_to_string(path)?
    };

    if text.trim().is_empty() {
        return Err(SourceError::MissingText(path.display().to_string()));
    }

    let absolute = fs::canonicalize(path)?;
    Ok(AcquiredInput {
        metadata: CaseMetadata::with_source_url(format!("file://{}", absolute.display())),
        text,
    })
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn extract_pdf_text(path: &Path) -> Result<String, SourceError> {
    let document = lopdf::Document::load(path)?;
    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    debug!("Extracting text from {} PDF pages", pages.len());

    let mut text = String::new();
    for page in pages {
        match document.extract_text(&[page]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => warn!("Skipping PDF page {}: {}", page, e),
        }
    }
    Ok(text)
}
