//! Discord implementation of the chat service.
//!
//! # Example
//!
//! ```rust,ignore
//! use quill_social::DiscordChatService;
//! use quill_transcript::{CreateTranscriptOptions, Transcriber};
//! use std::sync::Arc;
//!
//! let service = Arc::new(DiscordChatService::new(&token));
//! let channel = service.fetch_channel(channel_id).await?;
//! let transcriber = Transcriber::new(Arc::clone(&service), renderer);
//! let output = transcriber
//!     .create_transcript(&channel, CreateTranscriptOptions::default())
//!     .await?;
//! ```

use super::conversions::{
    convert_channel, convert_message, convert_role, convert_user, discord_id, to_create_attachment,
};
use async_trait::async_trait;
use quill_core::{Channel, ChatService, EntityKind, Guild, Message, PageRequest, Role, Snowflake, User};
use quill_error::{QuillResult, ServiceError, ServiceErrorKind};
use quill_transcript::TranscriptAttachment;
use serenity::builder::{CreateMessage, GetMessages};
use serenity::http::Http;
use serenity::model::channel::Channel as DiscordChannel;
use serenity::model::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

#[track_caller]
fn lookup_error(entity: EntityKind, id: Snowflake, reason: impl std::fmt::Display) -> ServiceError {
    ServiceError::new(ServiceErrorKind::Lookup {
        entity: entity.to_string(),
        id: id.to_string(),
        reason: reason.to_string(),
    })
}

/// Discord chat service over serenity's REST client.
///
/// Only the HTTP API is used; no gateway connection is opened.
#[derive(Clone)]
pub struct DiscordChatService {
    http: Arc<Http>,
}

impl std::fmt::Debug for DiscordChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordChatService").finish_non_exhaustive()
    }
}

impl DiscordChatService {
    /// Create a service with its own HTTP client.
    ///
    /// # Arguments
    ///
    /// * `token` - Discord bot token from the Discord Developer Portal
    #[instrument(skip(token), fields(token_len = token.as_ref().len()))]
    pub fn new(token: impl AsRef<str>) -> Self {
        info!("Creating standalone Discord chat service");
        let http = Arc::new(Http::new(token.as_ref()));
        Self { http }
    }

    /// Create a service sharing an existing HTTP client.
    ///
    /// Sharing the client with a running bot keeps rate limits coordinated.
    pub fn with_http_client(http: Arc<Http>) -> Self {
        info!("Creating Discord chat service with shared HTTP client");
        Self { http }
    }

    /// The underlying serenity client.
    pub fn http_client(&self) -> Arc<Http> {
        Arc::clone(&self.http)
    }

    #[instrument(skip(self), fields(guild_id = %guild_id))]
    async fn fetch_guild(&self, guild_id: GuildId) -> QuillResult<Guild> {
        let guild = self.http.get_guild(guild_id).await.map_err(|e| {
            error!(guild_id = %guild_id, error = %e, "Failed to fetch guild");
            ServiceError::new(ServiceErrorKind::Lookup {
                entity: "guild".to_string(),
                id: guild_id.to_string(),
                reason: e.to_string(),
            })
        })?;

        Ok(Guild::builder()
            .id(Snowflake::new(guild.id.get()))
            .name(guild.name.clone())
            .icon_url(guild.icon_url())
            .build()
            .map_err(|e| {
                ServiceError::new(ServiceErrorKind::Conversion {
                    entity: "guild".to_string(),
                    reason: e.to_string(),
                })
            })?)
    }

    /// Upload a transcript as a file to a channel.
    ///
    /// Returns the id of the posted message.
    ///
    /// # Errors
    ///
    /// Returns `ServiceErrorKind::Send` if Discord rejects the upload.
    #[instrument(
        skip(self, attachment),
        fields(
            channel_id = %channel_id,
            filename = %attachment.filename(),
            bytes = attachment.data().len()
        )
    )]
    pub async fn send_transcript(
        &self,
        channel_id: Snowflake,
        attachment: TranscriptAttachment,
    ) -> QuillResult<Snowflake> {
        let target: ChannelId = discord_id(EntityKind::Channel, channel_id)?;
        let builder = CreateMessage::new().add_file(to_create_attachment(attachment));

        let message = target
            .send_message(self.http.as_ref(), builder)
            .await
            .map_err(|e| {
                error!(channel_id = %channel_id, error = %e, "Failed to upload transcript");
                ServiceError::new(ServiceErrorKind::Send {
                    channel_id: channel_id.to_string(),
                    reason: e.to_string(),
                })
            })?;

        info!(message_id = %message.id, "Uploaded transcript");
        Ok(Snowflake::new(message.id.get()))
    }
}

#[async_trait]
impl ChatService for DiscordChatService {
    fn platform(&self) -> &str {
        "discord"
    }

    #[instrument(
        skip(self),
        fields(
            platform = "discord",
            channel_id = %channel_id,
            limit = *request.limit(),
            before = ?request.before(),
            page_len
        )
    )]
    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        request: PageRequest,
    ) -> QuillResult<Vec<Message>> {
        let channel: ChannelId = discord_id(EntityKind::Channel, channel_id)?;
        let limit = u8::try_from(*request.limit()).unwrap_or(u8::MAX);

        let mut builder = GetMessages::new().limit(limit);
        if let Some(before) = request.before() {
            let cursor: MessageId = discord_id("message", *before)?;
            builder = builder.before(cursor);
        }

        let page = channel
            .messages(self.http.as_ref(), builder)
            .await
            .map_err(|e| {
                error!(channel_id = %channel_id, error = %e, "Failed to fetch messages");
                ServiceError::new(ServiceErrorKind::FetchMessages {
                    channel_id: channel_id.to_string(),
                    reason: e.to_string(),
                })
            })?;

        tracing::Span::current().record("page_len", page.len());
        debug!(page_len = page.len(), "Fetched message page");

        page.iter().map(convert_message).collect()
    }

    #[instrument(skip(self), fields(platform = "discord", user_id = %user_id))]
    async fn fetch_user(&self, user_id: Snowflake) -> QuillResult<User> {
        let id: UserId = discord_id(EntityKind::User, user_id)?;
        let user = self
            .http
            .get_user(id)
            .await
            .map_err(|e| lookup_error(EntityKind::User, user_id, e))?;
        convert_user(&user)
    }

    #[instrument(skip(self), fields(platform = "discord", guild_id = %guild_id, role_id = %role_id))]
    async fn fetch_role(&self, guild_id: Snowflake, role_id: Snowflake) -> QuillResult<Role> {
        let guild: GuildId = discord_id("guild", guild_id)?;
        let wanted: RoleId = discord_id(EntityKind::Role, role_id)?;

        let roles = self
            .http
            .get_guild_roles(guild)
            .await
            .map_err(|e| lookup_error(EntityKind::Role, role_id, e))?;
        debug!(role_count = roles.len(), "Fetched guild roles");

        let role = roles.iter().find(|role| role.id == wanted).ok_or_else(|| {
            ServiceError::new(ServiceErrorKind::NotFound {
                entity: EntityKind::Role.to_string(),
                id: role_id.to_string(),
            })
        })?;
        convert_role(role)
    }

    #[instrument(skip(self), fields(platform = "discord", channel_id = %channel_id))]
    async fn fetch_channel(&self, channel_id: Snowflake) -> QuillResult<Channel> {
        let id: ChannelId = discord_id(EntityKind::Channel, channel_id)?;
        let channel = self
            .http
            .get_channel(id)
            .await
            .map_err(|e| lookup_error(EntityKind::Channel, channel_id, e))?;

        let guild = match &channel {
            DiscordChannel::Guild(guild_channel) => Some(self.fetch_guild(guild_channel.guild_id).await?),
            _ => None,
        };
        convert_channel(&channel, guild)
    }
}
