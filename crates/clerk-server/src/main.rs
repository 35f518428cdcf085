//! Clerk Server CLI
//!
//! Starts the HTTP server that generates PDF briefs for citations.

use clerk_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        eprintln!("Usage: clerk-server --config <path-to-config.toml>");
        eprintln!();
        ServerConfig::default()
    };

    start_server(config).await
}

fn print_help() {
    println!("Clerk Server - PDF case briefs over HTTP");
    println!();
    println!("USAGE:");
    println!("    clerk-server --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    POST /api/brief/by-citation   form fields: citation, mode, fmt=pdf");
    println!("    GET  /health");
    println!();
    println!("CONFIGURATION:");
    println!("    bind_address   IP address to bind (default '127.0.0.1')");
    println!("    bind_port      Port number (default 8000)");
    println!("    clerk_bin      Pipeline binary to spawn (default 'clerk')");
    println!("    clerk_config   Config file passed to the pipeline as --config");
    println!("    work_dir       Working directory for generated briefs (default '.')");
    println!();
    println!("CL_API_KEY is inherited by the pipeline for citation lookups.");
}
