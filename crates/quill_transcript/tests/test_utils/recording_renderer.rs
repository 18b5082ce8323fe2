//! Renderers that record what they were asked to render.

use async_trait::async_trait;
use quill_core::{Channel, Favicon, RenderRequest, Role, Snowflake, TranscriptRenderer, User};
use quill_error::{QuillResult, RenderError};
use std::sync::Mutex;

/// Snapshot of one render call.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct RecordedRender {
    pub message_ids: Vec<u64>,
    pub save_images: bool,
    pub powered_by: bool,
    pub favicon: Favicon,
    pub user: Option<User>,
    pub role: Option<Role>,
    pub channel: Option<Channel>,
}

/// Renderer that probes the resolver set with fixed ids and records the
/// request.
///
/// The document lists the rendered message ids, comma separated.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    probe: Option<Snowflake>,
    renders: Mutex<Vec<RecordedRender>>,
}

#[allow(dead_code)]
impl RecordingRenderer {
    /// Resolve `id` as a user, a role and a channel on every render.
    pub fn probing(id: u64) -> Self {
        Self {
            probe: Some(Snowflake::new(id)),
            ..Self::default()
        }
    }

    /// Render calls made so far.
    pub fn renders(&self) -> Vec<RecordedRender> {
        self.renders.lock().expect("Lock poisoned").clone()
    }
}

#[async_trait]
impl TranscriptRenderer for RecordingRenderer {
    async fn render(&self, request: RenderRequest<'_>) -> QuillResult<String> {
        let (user, role, channel) = match self.probe {
            Some(id) => (
                request.resolvers.resolve_user(id).await,
                request.resolvers.resolve_role(id).await,
                request.resolvers.resolve_channel(id).await,
            ),
            None => (None, None, None),
        };

        let message_ids: Vec<u64> = request.messages.iter().map(|m| m.id().get()).collect();
        let document = message_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.renders
            .lock()
            .expect("Lock poisoned")
            .push(RecordedRender {
                message_ids,
                save_images: request.save_images,
                powered_by: request.powered_by,
                favicon: request.favicon.clone(),
                user,
                role,
                channel,
            });

        Ok(document)
    }
}

/// Renderer that always fails.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingRenderer;

#[async_trait]
impl TranscriptRenderer for FailingRenderer {
    async fn render(&self, _request: RenderRequest<'_>) -> QuillResult<String> {
        Err(RenderError::new("template exploded"))?
    }
}
