//! Quill - chat channel transcripts
//!
//! Quill pages through a channel's message history on a chat service and
//! renders it into a single standalone document, resolving user, role and
//! channel mentions along the way.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quill::{CreateTranscriptOptions, DiscordChatService, FetchLimit, HtmlRenderer, Transcriber};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = Arc::new(DiscordChatService::new(std::env::var("DISCORD_TOKEN")?));
//!     let channel = service.fetch_channel("1234567890".parse()?).await?;
//!
//!     let transcriber = Transcriber::new(service, HtmlRenderer::new()?);
//!     let options = CreateTranscriptOptions::default().with_limit(FetchLimit::Bounded(500));
//!     let output = transcriber.create_transcript(&channel, options).await?;
//!     std::fs::write("transcript.html", output.into_bytes())?;
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `discord` - Discord binding and the `quill` binary (default)
//!
//! # Architecture
//!
//! - `quill_error` - Error types
//! - `quill_core` - Data model, chat service and renderer traits
//! - `quill_transcript` - History pagination, mention resolvers, output packaging
//! - `quill_render` - Reference HTML renderer
//! - `quill_social` - Chat platform bindings
//!
//! This crate (`quill`) re-exports everything for convenience.

mod config;

pub use config::{QuillConfig, TranscriptConfig};

// Re-export core crates (always available)
pub use quill_core::*;
pub use quill_error::*;
pub use quill_render::*;
pub use quill_transcript::*;

// Re-export optional crates based on features
#[cfg(feature = "discord")]
pub use quill_social::*;
