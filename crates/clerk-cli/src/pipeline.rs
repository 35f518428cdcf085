//! The brief pipeline: acquire, normalize, extract, assemble, gate, export.

use crate::cli::Cli;
use crate::config::ClerkConfig;
use crate::error::{CliError, Result};
use clerk_domain::{LlmProvider, WritingMode};
use clerk_export::{export, uniquify, ExportFormat, ExportOptions};
use clerk_extractor::{assemble, normalize, validate_for_export, BriefExtractor, GenerationRequest};
use clerk_source::{acquire, CaseLookup, InputSource};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything one invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefJob {
    /// Where the opinion comes from
    pub input: InputSource,
    /// Writing mode
    pub mode: WritingMode,
    /// Output encoding
    pub format: ExportFormat,
    /// Requested output path
    pub output: PathBuf,
    /// Whether `output` is the untouched default
    pub output_is_default: bool,
    /// Temperature override
    pub temperature: Option<f64>,
    /// Generation length override
    pub max_tokens: Option<u32>,
    /// Stop sequences
    pub stop: Vec<String>,
}

impl BriefJob {
    /// Build a job from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let input = cli
            .input()
            .ok_or_else(|| CliError::Source(clerk_source::SourceError::NoInput))?;
        Ok(Self {
            input,
            mode: cli.mode.into(),
            format: cli.format.into(),
            output: cli.output.clone(),
            output_is_default: cli.output_is_default(),
            temperature: cli.temperature,
            max_tokens: cli.max_tokens,
            stop: cli.stop_sequences.clone(),
        })
    }

    fn request(&self, text: String, config: &ClerkConfig) -> Result<GenerationRequest> {
        let mut request = GenerationRequest::from_config(text, self.mode, &config.extractor)
            .with_stop(Some(self.stop.clone()));
        if let Some(temperature) = self.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        request.validate()?;
        Ok(request)
    }
}

/// Run `job` end to end and return the path written.
///
/// Input errors stop the run before generation. A brief carrying error
/// sentinels is refused with [`CliError::Gate`] and no file is written.
pub fn run<L>(
    job: &BriefJob,
    lookup: Option<&dyn CaseLookup>,
    llm: L,
    config: &ClerkConfig,
) -> Result<PathBuf>
where
    L: LlmProvider,
    L::Error: Display,
{
    let acquired = acquire(&job.input, lookup)?;
    let metadata = acquired.metadata;
    debug!(case = %metadata.case_name, chars = acquired.text.len(), "Opinion acquired");

    let request = job.request(normalize(&acquired.text), config)?;

    info!("Generating case brief...");
    let extractor = BriefExtractor::new(llm, config.extractor.clone());
    let sections = extractor.extract(request, &metadata.case_name, &metadata.citation);

    let brief = assemble(&sections, &metadata);
    validate_for_export(&brief)?;

    let destination = resolve_output(
        job.format,
        &job.output,
        job.output_is_default,
        brief.case_name(),
    );
    let options = ExportOptions {
        logo_path: config.export.logo_path.clone(),
    };
    export(&brief, job.format, &destination, &options)?;

    Ok(destination)
}

/// Final output path for a brief.
///
/// PDF output left at the default name is named after the case, and PDF paths
/// never overwrite an existing file.
pub fn resolve_output(
    format: ExportFormat,
    output: &Path,
    output_is_default: bool,
    case_name: &str,
) -> PathBuf {
    match format {
        ExportFormat::Pdf => {
            let path = if output_is_default {
                PathBuf::from(format!("{}.pdf", case_file_stem(case_name)))
            } else {
                output.to_path_buf()
            };
            uniquify(&path)
        }
        ExportFormat::Json | ExportFormat::Txt => output.to_path_buf(),
    }
}

fn case_file_stem(case_name: &str) -> String {
    case_name.replace([' ', '/'], "_")
}
