//! Standalone HTML transcript documents.

use crate::{ImageInliner, MentionScanner, MentionTable, escape_html, render_content, resolve_mentions};
use async_trait::async_trait;
use chrono::format::{Item, StrftimeItems};
use derive_getters::Getters;
use derive_setters::Setters;
use quill_core::{Attachment, Channel, Favicon, Message, RenderRequest, Snowflake, TranscriptRenderer};
use quill_error::QuillResult;
use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, info, instrument, warn};

const STYLESHEET: &str = include_str!("transcript.css");
const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Renders transcripts as a single self-contained HTML5 page.
///
/// # Examples
///
/// ```
/// use quill_render::HtmlRenderer;
///
/// let renderer = HtmlRenderer::new()
///     .unwrap()
///     .with_generator("ticket-bot")
///     .with_timestamp_format("%d/%m/%Y %H:%M");
/// assert_eq!(renderer.generator(), "ticket-bot");
/// ```
#[derive(Debug, Clone, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct HtmlRenderer {
    #[getter(skip)]
    #[setters(skip)]
    scanner: MentionScanner,
    #[getter(skip)]
    #[setters(skip)]
    inliner: ImageInliner,
    /// Name shown in the footer
    #[setters(into)]
    generator: String,
    /// `chrono` format string for message timestamps
    #[setters(into)]
    timestamp_format: String,
}

impl HtmlRenderer {
    /// Renderer with its own HTTP client for image downloads.
    pub fn new() -> QuillResult<Self> {
        Ok(Self {
            scanner: MentionScanner::new()?,
            inliner: ImageInliner::default(),
            generator: format!("quill v{}", env!("CARGO_PKG_VERSION")),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        })
    }

    /// Download images through an existing HTTP client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.inliner = ImageInliner::new(client);
        self
    }

    /// The timestamp format, or `None` when chrono cannot parse it.
    fn time_format(&self) -> Option<&str> {
        let valid = StrftimeItems::new(&self.timestamp_format).all(|item| item != Item::Error);
        if valid {
            Some(self.timestamp_format.as_str())
        } else {
            warn!(format = %self.timestamp_format, "Invalid timestamp format, using RFC 3339");
            None
        }
    }

    fn favicon_url<'a>(favicon: &'a Favicon, channel: &'a Channel) -> Option<&'a str> {
        match favicon {
            Favicon::Guild => channel
                .guild()
                .as_ref()
                .and_then(|guild| guild.icon_url().as_deref()),
            Favicon::Url(url) => Some(url.as_str()),
        }
    }

    fn head(&self, request: &RenderRequest<'_>) -> String {
        let channel = request.channel;
        let title = match channel.guild() {
            Some(guild) => format!("{} - #{}", guild.name(), channel.name()),
            None => channel.name().clone(),
        };

        let mut head = String::from("<head>\n<meta charset=\"utf-8\">\n");
        head.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        head.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
        if let Some(icon) = Self::favicon_url(request.favicon, channel) {
            head.push_str(&format!("<link rel=\"icon\" href=\"{}\">\n", escape_html(icon)));
        }
        head.push_str(&format!("<style>\n{}</style>\n</head>\n", STYLESHEET));
        head
    }

    fn header(&self, request: &RenderRequest<'_>) -> String {
        let channel = request.channel;
        let mut header = String::from("<header class=\"channel-header\">\n");
        if let Some(icon) = channel.guild().as_ref().and_then(|g| g.icon_url().as_deref()) {
            header.push_str(&format!(
                "<img class=\"guild-icon\" src=\"{}\" alt=\"\">\n",
                escape_html(icon)
            ));
        }
        let prefix = if channel.is_dm_based() { "" } else { "#" };
        header.push_str(&format!(
            "<div>\n<h1>{}{}</h1>\n",
            prefix,
            escape_html(channel.name())
        ));
        let count = request.messages.len();
        let noun = if count == 1 { "message" } else { "messages" };
        match channel.guild() {
            Some(guild) => header.push_str(&format!(
                "<p>{} &middot; {} {}</p>\n",
                escape_html(guild.name()),
                count,
                noun
            )),
            None => header.push_str(&format!("<p>{} {}</p>\n", count, noun)),
        }
        header.push_str("</div>\n</header>\n");
        header
    }

    fn message(
        &self,
        message: &Message,
        mentions: &MentionTable,
        images: &HashMap<Snowflake, String>,
        time_format: Option<&str>,
    ) -> String {
        let author = message.author();
        let mut html = format!("<article class=\"message\" id=\"m-{}\">\n", message.id());

        match author.avatar_url() {
            Some(avatar) => html.push_str(&format!(
                "<img class=\"avatar\" src=\"{}\" alt=\"\">\n",
                escape_html(avatar)
            )),
            None => html.push_str("<div class=\"avatar placeholder\"></div>\n"),
        }

        html.push_str("<div class=\"body\">\n<div class=\"meta\">");
        html.push_str(&format!(
            "<span class=\"author\" title=\"{}\">{}</span>",
            escape_html(author.name()),
            escape_html(author.shown_name())
        ));
        if *author.bot() {
            html.push_str("<span class=\"bot-tag\">BOT</span>");
        }
        let machine = message.timestamp().to_rfc3339();
        let mut shown = String::new();
        let formatted = match time_format {
            Some(format) => write!(shown, "{}", message.timestamp().format(format)).is_ok(),
            None => false,
        };
        if !formatted {
            shown = machine.clone();
        }
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time>",
            machine,
            escape_html(&shown)
        ));
        if *message.edited() {
            html.push_str("<span class=\"edited\">(edited)</span>");
        }
        html.push_str("</div>\n");

        if !message.content().is_empty() {
            html.push_str(&format!(
                "<div class=\"content\">{}</div>\n",
                render_content(&self.scanner, message.content(), mentions)
            ));
        }

        for attachment in message.attachments() {
            html.push_str(&attachment_html(attachment, images.get(attachment.id())));
        }

        html.push_str("</div>\n</article>\n");
        html
    }
}

fn attachment_html(attachment: &Attachment, inlined: Option<&String>) -> String {
    let url = escape_html(attachment.url());
    let name = escape_html(attachment.filename());
    if attachment.is_image() {
        let src = inlined.map_or_else(|| url.clone(), |uri| escape_html(uri));
        format!(
            "<a class=\"attachment image\" href=\"{url}\"><img src=\"{src}\" alt=\"{name}\"></a>\n"
        )
    } else {
        format!(
            "<a class=\"attachment file\" href=\"{url}\">{name}<span class=\"size\">{}</span></a>\n",
            human_size(*attachment.size())
        )
    }
}

/// Format a byte count with a binary unit.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

#[async_trait]
impl TranscriptRenderer for HtmlRenderer {
    #[instrument(
        skip(self, request),
        fields(
            channel_id = %request.channel.id(),
            message_count = request.messages.len(),
            save_images = request.save_images,
            document_len
        )
    )]
    async fn render(&self, request: RenderRequest<'_>) -> QuillResult<String> {
        let mentions = self
            .scanner
            .distinct(request.messages.iter().map(|m| m.content().as_str()));
        let mentions = resolve_mentions(mentions, request.resolvers).await;

        let images = if request.save_images {
            self.inliner.inline_all(request.messages).await
        } else {
            HashMap::new()
        };
        debug!(mentions = mentions.len(), inlined = images.len(), "Prepared render inputs");

        let mut document = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n");
        document.push_str(&self.head(&request));
        document.push_str("<body>\n");
        document.push_str(&self.header(&request));
        document.push_str("<main class=\"messages\">\n");
        let time_format = self.time_format();
        for message in request.messages {
            document.push_str(&self.message(message, &mentions, &images, time_format));
        }
        document.push_str("</main>\n");
        if request.powered_by {
            document.push_str(&format!(
                "<footer>Exported {} message(s). Powered by {}.</footer>\n",
                request.messages.len(),
                escape_html(&self.generator)
            ));
        }
        document.push_str("</body>\n</html>\n");

        tracing::Span::current().record("document_len", document.len());
        info!(document_len = document.len(), "Rendered HTML transcript");
        Ok(document)
    }
}
