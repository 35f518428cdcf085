//! CLI argument definitions and parsing.

use clap::{ArgGroup, Parser};
use clerk_domain::WritingMode;
use clerk_export::ExportFormat;
use clerk_source::InputSource;
use std::path::PathBuf;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "brief_output.json";

/// Clerk - Generate a six-section case brief from a court opinion.
#[derive(Debug, Parser)]
#[command(name = "clerk")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["case", "pdf", "text"])))]
pub struct Cli {
    /// Case citation to look up (e.g. "384 U.S. 436")
    #[arg(long)]
    pub case: Option<String>,

    /// Opinion file (PDF, or plain text)
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Opinion text
    #[arg(long)]
    pub text: Option<String>,

    /// Writing mode
    #[arg(long, value_enum, default_value = "student")]
    pub mode: ModeArg,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Output file
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sampling temperature (0.0-1.0)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Maximum generated tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Stop sequences
    #[arg(long, num_args = 1..)]
    pub stop_sequences: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CourtListener API key
    #[arg(long, env = "CL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Writing mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Accessible prose for law students (default)
    Student,
    /// Formal prose for practitioners
    Professional,
}

impl From<ModeArg> for WritingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Student => WritingMode::Student,
            ModeArg::Professional => WritingMode::Professional,
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Flat JSON object (default)
    Json,
    /// Plain text
    Txt,
    /// Paginated PDF
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Txt => ExportFormat::Txt,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

impl Cli {
    /// The single input the user chose.
    pub fn input(&self) -> Option<InputSource> {
        if let Some(citation) = &self.case {
            Some(InputSource::Citation(citation.clone()))
        } else if let Some(path) = &self.pdf {
            Some(InputSource::File(path.clone()))
        } else {
            self.text.clone().map(InputSource::RawText)
        }
    }

    /// Whether `--output` was left at its default.
    pub fn output_is_default(&self) -> bool {
        self.output == PathBuf::from(DEFAULT_OUTPUT)
    }
}
