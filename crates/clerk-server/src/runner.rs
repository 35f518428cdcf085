//! Spawning the `clerk` binary for one brief.
//!
//! The child gets an argument vector, never a shell command line, so a
//! citation cannot inject anything. Its last stdout line names the file it
//! wrote.

use crate::config::ServerConfig;
use clerk_domain::WritingMode;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Subprocess failures
#[derive(Debug, Error)]
pub enum RunError {
    /// The binary could not be started
    #[error("Failed to start {bin}: {source}")]
    Spawn {
        /// Binary that failed to start
        bin: String,
        /// Underlying error
        source: std::io::Error,
    },

    /// The pipeline exited unsuccessfully
    #[error("Pipeline error:\n{stderr}")]
    Failed {
        /// Exit status description
        status: String,
        /// Captured stderr
        stderr: String,
    },

    /// The pipeline printed nothing
    #[error("Pipeline did not report an output file")]
    NoOutput,

    /// The reported file does not exist
    #[error("Pipeline reported file '{0}' but it was not found")]
    Missing(String),
}

/// Runs `clerk` as configured
#[derive(Debug, Clone)]
pub struct ClerkRunner {
    bin: PathBuf,
    config: Option<PathBuf>,
    work_dir: PathBuf,
}

impl ClerkRunner {
    /// Create a runner for `bin`, run inside `work_dir`
    pub fn new(bin: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin: bin.into(),
            config: None,
            work_dir: work_dir.into(),
        }
    }

    /// Pass `path` to every run as `--config`
    pub fn with_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.config = Some(path.into());
        self
    }

    /// Runner described by a server configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        let runner = Self::new(&config.clerk_bin, &config.work_dir);
        match &config.clerk_config {
            Some(path) => runner.with_config(path),
            None => runner,
        }
    }

    /// Arguments for one PDF brief
    pub fn args(&self, citation: &str, mode: WritingMode) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--case",
            citation,
            "--mode",
            mode.as_str(),
            "--format",
            "pdf",
            "--no-color",
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        if let Some(config) = &self.config {
            args.push("--config".into());
            args.push(config.into());
        }
        args
    }

    /// Generate a PDF brief and return the path of the file written
    pub async fn run(&self, citation: &str, mode: WritingMode) -> Result<PathBuf, RunError> {
        info!(citation, mode = %mode, "Spawning {}", self.bin.display());

        let output = Command::new(&self.bin)
            .args(self.args(citation, mode))
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| RunError::Spawn {
                bin: self.bin.display().to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            warn!(status = %output.status, "Pipeline failed");
            return Err(RunError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }
        debug!("Pipeline stderr:\n{}", stderr);

        let stdout = String::from_utf8_lossy(&output.stdout);
        let reported = last_line(&stdout).ok_or(RunError::NoOutput)?;

        let path = self.work_dir.join(reported);
        if !path.is_file() {
            return Err(RunError::Missing(reported.to_string()));
        }
        Ok(path)
    }
}

/// Last non-blank line of `stdout`, trimmed
pub fn last_line(stdout: &str) -> Option<&str> {
    stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
}

/// Human-readable case name for a brief file: `Roe_v._Wade.pdf` → `Roe v Wade`
pub fn case_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " ").replace('.', ""))
        .unwrap_or_default()
        .trim()
        .to_string()
}
