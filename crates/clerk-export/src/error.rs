//! Error types for brief export

use thiserror::Error;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// The brief still carries error sentinels and must not be written
    #[error("Refusing to export a brief with errors in: {}", .fields.join(", "))]
    Rejected {
        /// Titles of the offending fields
        fields: Vec<String>,
    },

    /// Unknown output format name
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Writing the output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// PDF assembly failed
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The logo image could not be decoded
    #[error("Logo error: {0}")]
    Logo(#[from] image::ImageError),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
