//! Error types for the Quill library.
//!
//! This crate provides the foundation error types used throughout the Quill workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use quill_error::{QuillResult, RenderError};
//!
//! fn render() -> QuillResult<String> {
//!     Err(RenderError::new("template missing"))?
//! }
//!
//! assert!(render().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod output;
mod render;
mod service;
mod transcript;

pub use config::ConfigError;
pub use error::{QuillError, QuillErrorKind, QuillResult};
pub use output::OutputError;
pub use render::RenderError;
pub use service::{ServiceError, ServiceErrorKind};
pub use transcript::{TranscriptError, TranscriptErrorKind};
