//! protoc-gen-service-registry entrypoint
//! Reads a CodeGeneratorRequest from stdin and writes the response to stdout.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use service_registry_gen::application::GeneratePluginUseCase;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

/// protoc invokes the plugin without arguments; the flags exist for running
/// it by hand against a captured request.
#[derive(Parser, Debug)]
#[command(name = "protoc-gen-service-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the serialized CodeGeneratorRequest from this file instead of stdin
    #[arg(long)]
    request: Option<PathBuf>,

    /// Parameter string to use instead of the one inside the request
    #[arg(long)]
    parameter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // stdout carries the protoc response, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let use_case = GeneratePluginUseCase::default();
    let stdout = io::stdout().lock();

    match &cli.request {
        Some(path) => {
            info!(request = %path.display(), "Reading request from file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open request file {}", path.display()))?;
            use_case
                .run(BufReader::new(file), stdout, cli.parameter.as_deref())
                .context("Failed to answer plugin request")?;
        }
        None => {
            use_case
                .run(io::stdin().lock(), stdout, cli.parameter.as_deref())
                .context("Failed to answer plugin request")?;
        }
    }

    Ok(())
}
