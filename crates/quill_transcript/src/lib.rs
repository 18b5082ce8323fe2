//! History retrieval and transcript assembly for Quill.
//!
//! This crate turns a channel's message history into a single transcript
//! document:
//!
//! - **History**: [`fetch_history`] walks a channel backwards page by page,
//!   each page strictly older than the last, and returns the accumulated
//!   messages oldest first.
//! - **Resolution**: [`default_resolvers`] binds mention lookups to the chat
//!   service with [`suppress`] so a failed lookup never fails a render.
//! - **Output**: [`package`] wraps the rendered document as text, bytes, or a
//!   named attachment.
//!
//! [`Transcriber`] combines the three behind `create_transcript` and
//! `generate_from_messages`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod options;
mod output;
mod resolvers;
mod transcriber;

pub use history::{FetchLimit, fetch_history};
pub use options::{CreateTranscriptOptions, ExportReturnType, GenerateOptions};
pub use output::{TranscriptAttachment, TranscriptOutput, default_filename, package};
pub use resolvers::{default_resolvers, suppress};
pub use transcriber::Transcriber;
