//! Clerk CLI library.
//!
//! Argument parsing, configuration loading, and the brief pipeline behind the
//! `clerk` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cli::Cli;
pub use config::ClerkConfig;
pub use error::{CliError, Result};
pub use pipeline::{resolve_output, BriefJob};
