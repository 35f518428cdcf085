//! Clerk CLI - Generate a case brief from a citation, an opinion file, or text.

use clap::Parser;
use clerk_cli::output::Reporter;
use clerk_cli::{pipeline, BriefJob, ClerkConfig, Cli};
use clerk_llm::OllamaProvider;
use clerk_source::{CaseLookup, CourtListenerClient, InputSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    let reporter = Reporter::new(!cli.no_color);
    match run(&cli) {
        Ok(path) => println!("{}", reporter.saved(&path)),
        Err(e) => {
            eprintln!("{}", reporter.failure(&e));
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> clerk_cli::Result<PathBuf> {
    let config = ClerkConfig::load(cli.config.as_deref())?;
    let job = BriefJob::from_cli(cli)?;

    let lookup = match (&job.input, &cli.api_key) {
        (InputSource::Citation(_), Some(api_key)) => Some(CourtListenerClient::new(
            &config.courtlistener.base_url,
            api_key,
            &config.courtlistener.user_agent,
        )?),
        _ => None,
    };

    let mut llm = OllamaProvider::new(&config.llm.endpoint, &config.llm.model)?;
    if let Some(secs) = config.llm.timeout_secs {
        llm = llm.with_timeout(Duration::from_secs(secs))?;
    }

    pipeline::run(
        &job,
        lookup.as_ref().map(|client| client as &dyn CaseLookup),
        llm,
        &config,
    )
}
