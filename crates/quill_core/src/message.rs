//! Message types for channel history.

use crate::{Snowflake, User};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Attachment {
    /// Attachment identifier
    id: Snowflake,
    /// Original filename
    filename: String,
    /// Download URL
    url: String,
    /// Size in bytes
    #[builder(default)]
    #[serde(default)]
    size: u64,
    /// MIME type reported by the service
    #[builder(default)]
    #[serde(default)]
    content_type: Option<String>,
}

impl Attachment {
    /// Creates a new attachment builder.
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Whether the attachment should be displayed inline as an image.
    pub fn is_image(&self) -> bool {
        if let Some(content_type) = &self.content_type {
            return content_type.starts_with("image/");
        }
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
            .unwrap_or(false)
    }
}

/// A single chat message.
///
/// # Examples
///
/// ```
/// use quill_core::{Message, Snowflake, User};
///
/// let author = User::builder()
///     .id(Snowflake::new(1))
///     .name("ferris")
///     .build()
///     .unwrap();
///
/// let message = Message::builder()
///     .id(Snowflake::new(175928847299117063))
///     .author(author)
///     .content("hello <@1>")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.timestamp(), &message.id().created_at());
/// assert!(message.attachments().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(private, name = "build_inner"))]
pub struct Message {
    /// Message identifier, ordered by creation time
    id: Snowflake,
    /// Author of the message
    author: User,
    /// Raw content, possibly containing mention tokens
    #[builder(default)]
    #[serde(default)]
    content: String,
    /// Attached files
    #[builder(default)]
    #[serde(default)]
    attachments: Vec<Attachment>,
    /// Creation time, derived from the identifier unless set explicitly
    #[builder(default = "DateTime::UNIX_EPOCH")]
    timestamp: DateTime<Utc>,
    /// Whether the message was edited after posting
    #[builder(default)]
    #[serde(default)]
    edited: bool,
}

impl Message {
    /// Creates a new message builder.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}

impl MessageBuilder {
    /// Build the message, deriving the timestamp from the id when none was given.
    pub fn build(&self) -> Result<Message, MessageBuilderError> {
        let explicit_timestamp = self.timestamp.is_some();
        let mut message = self.build_inner()?;
        if !explicit_timestamp {
            message.timestamp = message.id.created_at();
        }
        Ok(message)
    }
}

/// A plain ordered message sequence.
///
/// Built from a `Vec`, an iterator, or a keyed collection whose keys are
/// discarded with iteration order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSequence(Vec<Message>);

impl MessageSequence {
    /// Number of messages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence holds no message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The messages in order.
    pub fn into_vec(self) -> Vec<Message> {
        self.0
    }
}

impl From<Vec<Message>> for MessageSequence {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}

impl From<BTreeMap<Snowflake, Message>> for MessageSequence {
    fn from(messages: BTreeMap<Snowflake, Message>) -> Self {
        Self(messages.into_values().collect())
    }
}

impl FromIterator<Message> for MessageSequence {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
