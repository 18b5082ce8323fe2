//! Test utilities for Quill renderer tests.

use quill_core::{
    Attachment, Channel, ChannelKind, Guild, Message, ResolverSet, Role, Snowflake, User,
    null_resolver, resolver_fn,
};

/// Helper to create a guild text channel with an icon.
pub fn create_guild_channel() -> Channel {
    let guild = Guild::builder()
        .id(Snowflake::new(900))
        .name("Rustaceans")
        .icon_url(Some("https://cdn.example/icons/900.png".to_string()))
        .build()
        .expect("Failed to build guild");

    Channel::builder()
        .id(Snowflake::new(42))
        .name("general")
        .kind(ChannelKind::GuildText)
        .guild(Some(guild))
        .build()
        .expect("Failed to build channel")
}

/// Helper to create a direct-message channel.
#[allow(dead_code)]
pub fn create_dm_channel() -> Channel {
    Channel::builder()
        .id(Snowflake::new(43))
        .name("ferris")
        .kind(ChannelKind::Dm)
        .build()
        .expect("Failed to build channel")
}

/// Helper to create a message from a bot author.
pub fn create_message(id: u64, content: &str, attachments: Vec<Attachment>) -> Message {
    let author = User::builder()
        .id(Snowflake::new(1))
        .name("ferris")
        .display_name(Some("Ferris".to_string()))
        .bot(true)
        .build()
        .expect("Failed to build user");

    Message::builder()
        .id(Snowflake::new(id))
        .author(author)
        .content(content)
        .attachments(attachments)
        .build()
        .expect("Failed to build message")
}

/// Helper to create an attachment.
#[allow(dead_code)]
pub fn create_attachment(id: u64, filename: &str, url: &str, content_type: Option<&str>) -> Attachment {
    Attachment::builder()
        .id(Snowflake::new(id))
        .filename(filename)
        .url(url)
        .size(2048u64)
        .content_type(content_type.map(str::to_string))
        .build()
        .expect("Failed to build attachment")
}

/// Resolvers that know user 7 and role 8 and nothing else.
pub fn known_resolvers() -> ResolverSet {
    ResolverSet::new(
        null_resolver(),
        resolver_fn(|id: Snowflake| async move {
            (id.get() == 7)
                .then(|| User::builder().id(id).name("crab").build().ok())
                .flatten()
        }),
        resolver_fn(|id: Snowflake| async move {
            (id.get() == 8)
                .then(|| Role::builder().id(id).name("mods").build().ok())
                .flatten()
        }),
    )
}

/// Serve `body` once over HTTP on a local port and return its URL.
#[allow(dead_code)]
pub async fn serve_image_once(body: &'static [u8], content_type: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Listener has an address");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Failed to accept");
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await;
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            content_type,
            body.len()
        );
        socket
            .write_all(head.as_bytes())
            .await
            .expect("Failed to write head");
        socket.write_all(body).await.expect("Failed to write body");
        socket.shutdown().await.ok();
    });

    format!("http://{}/cat.png", addr)
}
