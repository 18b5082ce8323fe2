//! Tests for the HTML transcript renderer.

mod test_utils;

use quill_core::{Favicon, RenderRequest, ResolverSet, TranscriptRenderer};
use quill_render::{DELETED_CHANNEL, DELETED_ROLE, HtmlRenderer, UNKNOWN_USER};
use test_utils::{
    create_attachment, create_dm_channel, create_guild_channel, create_message, known_resolvers,
    serve_image_once,
};

async fn render(
    renderer: &HtmlRenderer,
    messages: &[quill_core::Message],
    channel: &quill_core::Channel,
    resolvers: &ResolverSet,
    save_images: bool,
    powered_by: bool,
    favicon: &Favicon,
) -> String {
    renderer
        .render(RenderRequest {
            messages,
            channel,
            resolvers,
            save_images,
            powered_by,
            favicon,
        })
        .await
        .expect("Render failed")
}

#[tokio::test]
async fn test_document_has_title_favicon_and_footer() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let messages = vec![create_message(100, "hello", Vec::new())];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Rustaceans - #general</title>"));
    assert!(html.contains("<link rel=\"icon\" href=\"https://cdn.example/icons/900.png\">"));
    assert!(html.contains("Powered by quill"));
    assert!(html.contains("id=\"m-100\""));
    assert!(html.contains("<span class=\"author\" title=\"ferris\">Ferris</span>"));
    assert!(html.contains("bot-tag"));
}

#[tokio::test]
async fn test_footer_and_favicon_follow_flags() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let messages = vec![create_message(100, "hello", Vec::new())];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        false,
        &Favicon::Url("https://example.org/fav.ico".to_string()),
    )
    .await;

    assert!(!html.contains("<footer>"));
    assert!(html.contains("href=\"https://example.org/fav.ico\""));
    assert!(!html.contains("rel=\"icon\" href=\"https://cdn.example"));
}

#[tokio::test]
async fn test_dm_channel_has_no_guild_favicon() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_dm_channel();

    let html = render(
        &renderer,
        &[],
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(!html.contains("rel=\"icon\""));
    assert!(html.contains("<title>ferris</title>"));
    assert!(html.contains("0 messages"));
}

#[tokio::test]
async fn test_mentions_resolve_or_fall_back() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let messages = vec![
        create_message(100, "hey <@7> and <@!9>", Vec::new()),
        create_message(200, "<@&8> <@&10> in <#11>", Vec::new()),
    ];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &known_resolvers(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains("@crab"));
    assert!(html.contains(UNKNOWN_USER));
    assert!(html.contains("@mods"));
    assert!(html.contains(DELETED_ROLE));
    assert!(html.contains(DELETED_CHANNEL));
}

#[tokio::test]
async fn test_content_is_escaped() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let messages = vec![create_message(100, "<script>alert(1)</script>", Vec::new())];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_attachments_link_without_save_images() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let attachments = vec![
        create_attachment(1, "cat.png", "https://cdn.example/cat.png", Some("image/png")),
        create_attachment(2, "notes.txt", "https://cdn.example/notes.txt", None),
    ];
    let messages = vec![create_message(100, "", attachments)];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains("<img src=\"https://cdn.example/cat.png\" alt=\"cat.png\">"));
    assert!(html.contains("notes.txt<span class=\"size\">2.0 KB</span>"));
    assert!(!html.contains("class=\"content\""));
}

#[tokio::test]
async fn test_failed_image_download_falls_back_to_url() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let unreachable = "http://127.0.0.1:9/cat.png";
    let attachments = vec![create_attachment(1, "cat.png", unreachable, Some("image/png"))];
    let messages = vec![create_message(100, "", attachments)];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        true,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains(&format!("<img src=\"{}\"", unreachable)));
    assert!(!html.contains("data:image/png;base64"));
}

#[tokio::test]
async fn test_messages_render_in_given_order() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let messages = vec![
        create_message(300, "third", Vec::new()),
        create_message(100, "first", Vec::new()),
    ];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    let third = html.find("id=\"m-300\"").expect("Third message rendered");
    let first = html.find("id=\"m-100\"").expect("First message rendered");
    assert!(third < first);
}

#[tokio::test]
async fn test_downloaded_image_is_inlined() {
    let renderer = HtmlRenderer::new().expect("Renderer");
    let channel = create_guild_channel();
    let url = serve_image_once(b"abc", "image/png").await;
    let attachments = vec![create_attachment(1, "cat.png", &url, Some("image/png"))];
    let messages = vec![create_message(100, "", attachments)];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        true,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains("<img src=\"data:image/png;base64,YWJj\""));
    // The link still points at the original file.
    assert!(html.contains(&format!("href=\"{}\"", url)));
}

#[tokio::test]
async fn test_invalid_timestamp_format_falls_back_to_rfc3339() {
    let renderer = HtmlRenderer::new()
        .expect("Renderer")
        .with_timestamp_format("%Q %");
    let channel = create_guild_channel();
    let messages = vec![create_message(175928847299117063, "hello", Vec::new())];
    let machine = messages[0].timestamp().to_rfc3339();

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains(&format!("<time datetime=\"{machine}\">{machine}</time>")));
}

#[tokio::test]
async fn test_custom_timestamp_format_is_used() {
    let renderer = HtmlRenderer::new()
        .expect("Renderer")
        .with_timestamp_format("%d/%m/%Y");
    let channel = create_guild_channel();
    let messages = vec![create_message(175928847299117063, "hello", Vec::new())];

    let html = render(
        &renderer,
        &messages,
        &channel,
        &ResolverSet::unresolved(),
        false,
        true,
        &Favicon::Guild,
    )
    .await;

    assert!(html.contains(">30/04/2016</time>"));
}
