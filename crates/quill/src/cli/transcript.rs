//! Transcript command handler.

use super::TranscriptArgs;
use quill::{
    ChatService, DiscordChatService, ExportReturnType, Favicon, HtmlRenderer, OutputError,
    QuillResult, Transcriber, TranscriptConfig, TranscriptOutput, default_filename,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument};

/// Overlay command-line flags on configured defaults.
pub fn apply_overrides(mut settings: TranscriptConfig, args: &TranscriptArgs) -> TranscriptConfig {
    if let Some(limit) = args.limit {
        settings.limit = Some(limit);
    }
    if let Some(format) = args.format {
        settings.return_type = format.into();
    }
    if let Some(filename) = &args.filename {
        settings.filename = Some(filename.clone());
    }
    if let Some(favicon) = &args.favicon {
        settings.favicon = Favicon::from(favicon.clone());
    }
    if args.save_images {
        settings.save_images = true;
    }
    if args.no_powered_by {
        settings.powered_by = false;
    }
    settings
}

fn write_file(path: &Path, bytes: &[u8]) -> QuillResult<()> {
    std::fs::write(path, bytes).map_err(|e| {
        OutputError::new(format!("Failed to write {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "Wrote transcript");
    Ok(())
}

/// Export a channel and write or upload the result.
#[instrument(skip(args, settings), fields(channel_id = %args.channel))]
pub async fn run_transcript(args: TranscriptArgs, settings: TranscriptConfig) -> QuillResult<()> {
    let settings = apply_overrides(settings, &args);
    let options = settings.to_options()?;

    let service = Arc::new(DiscordChatService::new(&args.token));
    let channel = service.fetch_channel(args.channel).await?;
    info!(channel = %channel.name(), kind = %channel.kind(), "Resolved channel");

    let transcriber = Transcriber::new(Arc::clone(&service), HtmlRenderer::new()?);
    let output = transcriber.create_transcript(&channel, options).await?;

    match output {
        TranscriptOutput::Text(text) => match &args.output {
            Some(path) => write_file(path, text.as_bytes())?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(text.as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(|e| OutputError::new(format!("Failed to write stdout: {}", e)))?;
            }
        },
        TranscriptOutput::Buffer(bytes) => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(default_filename(args.channel)));
            write_file(&path, &bytes)?;
        }
        TranscriptOutput::Attachment(file) => {
            let path = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(file.filename()));
            write_file(&path, file.data())?;

            if let Some(target) = args.post_to {
                let message_id = service.send_transcript(target, file).await?;
                info!(target = %target, message_id = %message_id, "Posted transcript");
            }
        }
    }

    if args.post_to.is_some() && settings.return_type != ExportReturnType::Attachment {
        tracing::warn!(
            return_type = %settings.return_type,
            "--post-to needs the attachment format, nothing was uploaded"
        );
    }

    Ok(())
}
