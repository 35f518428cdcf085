//! Clerk Export
//!
//! Writes an [`AssembledBrief`] to disk in one of three encodings:
//!
//! - **json**: the brief fields as a flat object, plus generation info and disclosure
//! - **txt**: `"<name>:\n<value>\n\n"` per field, plus the same two blocks
//! - **pdf**: a cover page and a paginated body with a running logo header
//!
//! Every export refuses briefs that still carry error sentinels, and renders
//! the whole document in memory before the destination file is created.

#![warn(missing_docs)]

mod error;
mod json;
mod paths;
mod pdf;
mod provenance;
mod text;

#[cfg(test)]
mod tests;

pub use error::{ExportError, Result};
pub use paths::uniquify;
pub use pdf::Logo;
pub use provenance::{
    Provenance, COPYRIGHT_NOTICE, DISCLOSURE, DISCLOSURE_KEY, GENERATION_INFO_KEY,
};

use clerk_domain::AssembledBrief;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Flat key/value JSON object
    #[default]
    Json,
    /// Delimited plain text
    Txt,
    /// Paginated PDF document
    Pdf,
}

impl ExportFormat {
    /// Format name, also used as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Txt => "txt",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Parse a format name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "txt" => Some(ExportFormat::Txt),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| ExportError::UnsupportedFormat(s.to_string()))
    }
}

/// Export settings that do not vary per brief
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Logo image for the PDF cover and header; omitted when `None`
    pub logo_path: Option<PathBuf>,
}

/// Write `brief` to `destination`, stamped with the current time
pub fn export(
    brief: &AssembledBrief,
    format: ExportFormat,
    destination: &Path,
    options: &ExportOptions,
) -> Result<()> {
    export_with_provenance(brief, format, destination, options, &Provenance::now())
}

/// Write `brief` to `destination` with the given provenance
///
/// Nothing is written when the brief carries an error sentinel or when
/// rendering fails.
pub fn export_with_provenance(
    brief: &AssembledBrief,
    format: ExportFormat,
    destination: &Path,
    options: &ExportOptions,
    provenance: &Provenance,
) -> Result<()> {
    let flagged = brief.sentinel_fields();
    if !flagged.is_empty() {
        return Err(ExportError::Rejected {
            fields: flagged.iter().map(|f| f.title().to_string()).collect(),
        });
    }

    let bytes = render(brief, format, options, provenance)?;
    std::fs::write(destination, bytes)?;

    info!(
        format = %format,
        path = %destination.display(),
        "Brief exported"
    );
    Ok(())
}

/// Render `brief` in memory
pub fn render(
    brief: &AssembledBrief,
    format: ExportFormat,
    options: &ExportOptions,
    provenance: &Provenance,
) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(json::render(brief, provenance)?.into_bytes()),
        ExportFormat::Txt => Ok(text::render(brief, provenance).into_bytes()),
        ExportFormat::Pdf => {
            let logo = options.logo_path.as_deref().map(Logo::load).transpose()?;
            pdf::render(brief, provenance, logo.as_ref())
        }
    }
}
