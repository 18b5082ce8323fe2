//! Packaging of rendered documents into the requested output shape.

use crate::ExportReturnType;
use derive_getters::Getters;
use quill_core::Snowflake;

/// A rendered document wrapped as a named file.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TranscriptAttachment {
    /// File name presented to the recipient
    filename: String,
    /// Encoded document
    data: Vec<u8>,
}

impl TranscriptAttachment {
    /// Wrap encoded bytes under a filename.
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            data,
        }
    }

    /// Take the filename and bytes apart.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.filename, self.data)
    }
}

/// A transcript in one of the three output shapes.
///
/// # Examples
///
/// ```
/// use quill_transcript::{ExportReturnType, TranscriptOutput, package};
/// use quill_core::Snowflake;
///
/// let output = package("<html></html>".to_string(), Snowflake::new(42), ExportReturnType::Attachment, None);
/// match output {
///     TranscriptOutput::Attachment(file) => assert_eq!(file.filename(), "transcript-42.html"),
///     other => panic!("unexpected output: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptOutput {
    /// Document text
    Text(String),
    /// UTF-8 encoded document
    Buffer(Vec<u8>),
    /// UTF-8 encoded document with a filename
    Attachment(TranscriptAttachment),
}

impl TranscriptOutput {
    /// The output shape this value has.
    pub fn return_type(&self) -> ExportReturnType {
        match self {
            TranscriptOutput::Text(_) => ExportReturnType::String,
            TranscriptOutput::Buffer(_) => ExportReturnType::Buffer,
            TranscriptOutput::Attachment(_) => ExportReturnType::Attachment,
        }
    }

    /// Encoded document bytes, whatever the shape.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            TranscriptOutput::Text(text) => text.into_bytes(),
            TranscriptOutput::Buffer(bytes) => bytes,
            TranscriptOutput::Attachment(file) => file.data,
        }
    }

    /// Document text, if the output is [`TranscriptOutput::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranscriptOutput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The attachment, if the output is [`TranscriptOutput::Attachment`].
    pub fn into_attachment(self) -> Option<TranscriptAttachment> {
        match self {
            TranscriptOutput::Attachment(file) => Some(file),
            _ => None,
        }
    }
}

/// Default attachment filename for a channel.
pub fn default_filename(channel_id: Snowflake) -> String {
    format!("transcript-{channel_id}.html")
}

/// Wrap a rendered document in the requested shape.
pub fn package(
    document: String,
    channel_id: Snowflake,
    return_type: ExportReturnType,
    filename: Option<&str>,
) -> TranscriptOutput {
    match return_type {
        ExportReturnType::String => TranscriptOutput::Text(document),
        ExportReturnType::Buffer => TranscriptOutput::Buffer(document.into_bytes()),
        ExportReturnType::Attachment => {
            let name = filename.map_or_else(|| default_filename(channel_id), str::to_string);
            TranscriptOutput::Attachment(TranscriptAttachment::new(name, document.into_bytes()))
        }
    }
}
