//! Transcript renderer interface.

use crate::{Channel, Message, ResolverSet};
use async_trait::async_trait;
use quill_error::QuillResult;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// Where the transcript's favicon comes from.
///
/// # Examples
///
/// ```
/// use quill_core::Favicon;
///
/// assert_eq!("guild".parse::<Favicon>().unwrap(), Favicon::Guild);
/// assert_eq!(
///     "https://cdn.example/icon.png".parse::<Favicon>().unwrap(),
///     Favicon::Url("https://cdn.example/icon.png".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(from = "String", into = "String")]
pub enum Favicon {
    /// Use the parent guild's icon
    #[default]
    #[display("guild")]
    Guild,
    /// Use an explicit icon URL
    #[display("{_0}")]
    Url(String),
}

impl FromStr for Favicon {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Favicon::from(s.to_string()))
    }
}

impl From<String> for Favicon {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("guild") {
            Favicon::Guild
        } else {
            Favicon::Url(value)
        }
    }
}

impl From<Favicon> for String {
    fn from(value: Favicon) -> Self {
        value.to_string()
    }
}

/// Everything a renderer receives for one transcript.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Messages in chronological (oldest-first) order
    pub messages: &'a [Message],
    /// Channel the messages come from
    pub channel: &'a Channel,
    /// Mention resolvers
    pub resolvers: &'a ResolverSet,
    /// Inline image attachments instead of linking them
    pub save_images: bool,
    /// Append a generator footer
    pub powered_by: bool,
    /// Favicon selection
    pub favicon: &'a Favicon,
}

/// Turns an ordered message sequence into a transcript document.
///
/// Called exactly once per transcript. Any error is fatal to the transcript
/// and is returned to the caller unchanged.
#[async_trait]
pub trait TranscriptRenderer: Send + Sync {
    /// Render the request into a complete document.
    async fn render(&self, request: RenderRequest<'_>) -> QuillResult<String>;
}
