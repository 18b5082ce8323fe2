//! Quill CLI binary.
//!
//! This binary exports a Discord channel's history as an HTML transcript,
//! writing it to disk or stdout and optionally posting it to another channel.

use clap::Parser;
use quill::QuillConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_transcript};

    // Token may come from a .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => QuillConfig::from_file(path)?,
        None => QuillConfig::load()?,
    };

    match cli.command {
        Commands::Transcript(args) => {
            run_transcript(args, config.transcript).await?;
        }
    }

    Ok(())
}
