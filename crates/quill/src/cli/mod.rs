//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the quill binary.

mod commands;
mod transcript;

pub use commands::{Cli, Commands, TranscriptArgs};
pub use transcript::run_transcript;
