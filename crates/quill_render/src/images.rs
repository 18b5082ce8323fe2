//! Image attachment inlining.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::join_all;
use quill_core::{Attachment, Message, Snowflake};
use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Downloads image attachments and encodes them as `data:` URIs.
#[derive(Debug, Clone, Default)]
pub struct ImageInliner {
    client: Client,
}

impl ImageInliner {
    /// Use an existing HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch one attachment as a data URI.
    ///
    /// Returns `None` and logs a warning when the download fails; callers
    /// fall back to the remote URL.
    #[instrument(skip(self, attachment), fields(attachment_id = %attachment.id(), url = %attachment.url()))]
    pub async fn data_uri(&self, attachment: &Attachment) -> Option<String> {
        let response = match self.client.get(attachment.url()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Image download failed, linking instead");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "Image download rejected, linking instead");
            return None;
        }

        let header_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(error = %e, "Image body unreadable, linking instead");
                return None;
            }
        };

        let mime = attachment
            .content_type()
            .clone()
            .or(header_type)
            .unwrap_or_else(|| "application/octet-stream".to_string());
        debug!(bytes = bytes.len(), mime = %mime, "Inlined image");
        Some(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
    }

    /// Inline every image attachment of `messages` concurrently.
    ///
    /// The map only holds attachments that downloaded successfully.
    #[instrument(skip_all, fields(images))]
    pub async fn inline_all(&self, messages: &[Message]) -> HashMap<Snowflake, String> {
        let images: Vec<&Attachment> = messages
            .iter()
            .flat_map(|message| message.attachments())
            .filter(|attachment| attachment.is_image())
            .collect();
        tracing::Span::current().record("images", images.len());

        let downloads = images.into_iter().map(|attachment| async move {
            self.data_uri(attachment)
                .await
                .map(|uri| (*attachment.id(), uri))
        });

        join_all(downloads).await.into_iter().flatten().collect()
    }
}
