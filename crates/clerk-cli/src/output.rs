//! Result lines printed by the CLI.
//!
//! Logs go to stderr; stdout carries only the outcome, ending with the path of
//! the written file on a line of its own.

use crate::error::CliError;
use colored::*;
use std::path::Path;

/// Output formatter.
pub struct Reporter {
    color_enabled: bool,
}

impl Reporter {
    /// Create a new reporter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// stdout lines for a written brief; the last one is the bare path.
    pub fn saved(&self, path: &Path) -> String {
        let notice = format!("Brief saved to {}", path.display());
        let notice = if self.color_enabled {
            notice.green().to_string()
        } else {
            notice
        };
        format!("{}\n{}", notice, path.display())
    }

    /// stderr line for a failed run.
    pub fn failure(&self, error: &CliError) -> String {
        let line = match error {
            CliError::Gate(gate) => gate.to_string(),
            other => format!("Error: {}", other),
        };
        if self.color_enabled {
            line.red().bold().to_string()
        } else {
            line
        }
    }
}
