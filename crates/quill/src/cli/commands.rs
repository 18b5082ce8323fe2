//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use quill::{ExportReturnType, Snowflake};
use std::path::PathBuf;

/// Quill - export chat channel history as standalone transcripts
#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Export chat channel history as standalone transcripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export a channel's history
    Transcript(TranscriptArgs),
}

/// Arguments of `quill transcript`.
#[derive(Args, Debug)]
pub struct TranscriptArgs {
    /// Channel to export
    #[arg(long)]
    pub channel: Snowflake,

    /// Maximum number of messages, newest first (default: whole channel)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Write the transcript here (default: attachment name, stdout for `string`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output shape
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Attachment file name
    #[arg(long)]
    pub filename: Option<String>,

    /// Embed image attachments in the document
    #[arg(long)]
    pub save_images: bool,

    /// Leave out the generator footer
    #[arg(long)]
    pub no_powered_by: bool,

    /// Favicon URL ("guild" for the server icon)
    #[arg(long)]
    pub favicon: Option<String>,

    /// Also upload the transcript to this channel
    #[arg(long)]
    pub post_to: Option<Snowflake>,

    /// Discord bot token
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: String,
}

/// Output shape selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Named HTML file
    Attachment,
    /// Raw document bytes
    Buffer,
    /// Document text
    String,
}

impl From<OutputFormat> for ExportReturnType {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Attachment => ExportReturnType::Attachment,
            OutputFormat::Buffer => ExportReturnType::Buffer,
            OutputFormat::String => ExportReturnType::String,
        }
    }
}
