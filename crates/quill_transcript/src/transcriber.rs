//! Transcript entry points.
//!
//! [`Transcriber`] ties a chat service to a renderer and exposes the two
//! public operations:
//! - [`Transcriber::create_transcript`] fetches a channel's history and renders it
//! - [`Transcriber::generate_from_messages`] renders an already fetched sequence
//!
//! # Example
//!
//! ```rust,ignore
//! use quill_transcript::{CreateTranscriptOptions, FetchLimit, Transcriber};
//!
//! let transcriber = Transcriber::new(service, HtmlRenderer::new()?);
//! let options = CreateTranscriptOptions::default().with_limit(FetchLimit::Bounded(500));
//! let output = transcriber.create_transcript(&channel, options).await?;
//! ```

use crate::{
    CreateTranscriptOptions, FetchLimit, GenerateOptions, TranscriptOutput, default_resolvers,
    fetch_history, package,
};
use quill_core::{Channel, ChatService, MessageSequence, RenderRequest, TranscriptRenderer};
use quill_error::{QuillResult, TranscriptError, TranscriptErrorKind};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Builds transcripts from a chat service's history.
pub struct Transcriber<S: ?Sized, R> {
    service: Arc<S>,
    renderer: R,
}

impl<S, R> Transcriber<S, R>
where
    S: ChatService + ?Sized + 'static,
    R: TranscriptRenderer,
{
    /// Pair a chat service with a renderer.
    pub fn new(service: Arc<S>, renderer: R) -> Self {
        Self { service, renderer }
    }

    /// The chat service backing history retrieval and default resolvers.
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    /// The renderer producing documents.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render an already fetched message sequence.
    ///
    /// Messages are passed to the renderer in the order given. Mentions are
    /// resolved through service-backed defaults overlaid with
    /// `options.callbacks()`; a failed lookup resolves to nothing and never
    /// fails the render.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error unchanged. No partial output is produced.
    #[instrument(
        skip(self, messages, channel, options),
        fields(
            platform = self.service.platform(),
            channel_id = %channel.id(),
            return_type = %options.return_type(),
            message_count,
            document_len
        )
    )]
    pub async fn generate_from_messages(
        &self,
        messages: impl Into<MessageSequence>,
        channel: &Channel,
        options: GenerateOptions,
    ) -> QuillResult<TranscriptOutput> {
        let messages = messages.into().into_vec();
        tracing::Span::current().record("message_count", messages.len());

        let resolvers = default_resolvers(Arc::clone(&self.service), channel)
            .overlay(options.callbacks());
        debug!(overrides = ?options.callbacks(), "Built resolver set");

        let request = RenderRequest {
            messages: &messages,
            channel,
            resolvers: &resolvers,
            save_images: *options.save_images(),
            powered_by: *options.powered_by(),
            favicon: options.favicon(),
        };

        let document = self.renderer.render(request).await.map_err(|e| {
            error!(channel_id = %channel.id(), error = %e, "Renderer failed");
            e
        })?;

        tracing::Span::current().record("document_len", document.len());
        info!(
            message_count = messages.len(),
            document_len = document.len(),
            "Rendered transcript"
        );

        Ok(package(
            document,
            *channel.id(),
            *options.return_type(),
            options.filename().as_deref(),
        ))
    }

    /// Fetch a channel's history and render it.
    ///
    /// Retrieves up to `options.limit()` of the most recent messages, oldest
    /// first, then delegates to [`Self::generate_from_messages`].
    ///
    /// # Errors
    ///
    /// - `TranscriptErrorKind::NotTextBased` if the channel has no message
    ///   history; nothing is fetched in that case
    /// - the first history page fetch failure
    /// - the renderer's error
    #[instrument(
        skip(self, channel, options),
        fields(
            platform = self.service.platform(),
            channel_id = %channel.id(),
            channel_kind = %channel.kind(),
            limit = ?options.limit()
        )
    )]
    pub async fn create_transcript(
        &self,
        channel: &Channel,
        options: CreateTranscriptOptions,
    ) -> QuillResult<TranscriptOutput> {
        if !channel.is_text_based() {
            error!(channel_id = %channel.id(), kind = %channel.kind(), "Channel is not text-based");
            return Err(TranscriptError::new(TranscriptErrorKind::NotTextBased {
                channel_id: channel.id().to_string(),
                kind: channel.kind().to_string(),
            })
            .into());
        }

        let (limit, generate) = options.into_parts();
        info!("Creating transcript");

        let messages = fetch_history(self.service.as_ref(), *channel.id(), limit).await?;
        if let FetchLimit::Bounded(bound) = limit {
            debug!(bound, fetched = messages.len(), "Bounded history retrieved");
        }

        self.generate_from_messages(messages, channel, generate).await
    }
}
