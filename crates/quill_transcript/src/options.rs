//! Caller options for transcript generation.

use crate::FetchLimit;
use derive_getters::Getters;
use derive_setters::Setters;
use quill_core::{Favicon, ResolverOverrides};
use serde::{Deserialize, Serialize};

/// Shape of the value a transcript operation returns.
///
/// # Examples
///
/// ```
/// use quill_transcript::ExportReturnType;
///
/// assert_eq!(ExportReturnType::default(), ExportReturnType::Attachment);
/// assert_eq!("buffer".parse::<ExportReturnType>().unwrap(), ExportReturnType::Buffer);
/// assert_eq!(ExportReturnType::String.to_string(), "string");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportReturnType {
    /// Named file attachment wrapping the encoded document
    #[default]
    Attachment,
    /// Encoded document bytes
    Buffer,
    /// Document text
    String,
}

/// Options for rendering an already fetched message sequence.
///
/// # Examples
///
/// ```
/// use quill_transcript::{ExportReturnType, GenerateOptions};
///
/// let options = GenerateOptions::default()
///     .with_return_type(ExportReturnType::String)
///     .with_powered_by(false);
///
/// assert!(!*options.save_images());
/// assert!(!*options.powered_by());
/// assert!(options.filename().is_none());
/// ```
#[derive(Debug, Clone, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct GenerateOptions {
    /// Inline image attachments into the document
    save_images: bool,
    /// Resolvers replacing the service-backed defaults
    callbacks: ResolverOverrides,
    /// Append the generator footer
    powered_by: bool,
    /// Favicon selection
    #[setters(into)]
    favicon: Favicon,
    /// Output shape
    return_type: ExportReturnType,
    /// Attachment filename, defaults to `transcript-{channel_id}.html`
    #[setters(strip_option, into)]
    filename: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            save_images: false,
            callbacks: ResolverOverrides::default(),
            powered_by: true,
            favicon: Favicon::Guild,
            return_type: ExportReturnType::Attachment,
            filename: None,
        }
    }
}

/// Options for fetching and rendering a channel's history.
///
/// # Examples
///
/// ```
/// use quill_transcript::{CreateTranscriptOptions, FetchLimit, GenerateOptions};
///
/// let options = CreateTranscriptOptions::default()
///     .with_limit(FetchLimit::Bounded(250))
///     .with_generate(GenerateOptions::default().with_save_images(true));
///
/// assert_eq!(*options.limit(), FetchLimit::Bounded(250));
/// assert!(*options.generate().save_images());
/// ```
#[derive(Debug, Clone, Default, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct CreateTranscriptOptions {
    /// How much history to retrieve
    #[setters(into)]
    limit: FetchLimit,
    /// Rendering and packaging options
    generate: GenerateOptions,
}

impl CreateTranscriptOptions {
    /// Split into the history limit and the rendering options.
    pub fn into_parts(self) -> (FetchLimit, GenerateOptions) {
        (self.limit, self.generate)
    }
}
