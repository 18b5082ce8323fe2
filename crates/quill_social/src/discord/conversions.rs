//! Conversions from serenity models to Quill models.
//!
//! Serenity ids are non-zero, Quill snowflakes are plain integers, so going
//! from serenity to Quill is infallible for ids while the reverse direction
//! (see [`discord_id`]) rejects zero.

use quill_core::{Attachment, Channel, ChannelKind, EntityKind, Guild, Message, Role, Snowflake, User};
use quill_error::{QuillResult, ServiceError, ServiceErrorKind};
use quill_transcript::TranscriptAttachment;
use serenity::builder::CreateAttachment;
use serenity::model::channel::{
    Attachment as DiscordAttachment, Channel as DiscordChannel, Message as DiscordMessage,
};
use serenity::model::guild::Role as DiscordRole;
use serenity::model::user::User as DiscordUser;
use std::fmt::Display;
use std::num::NonZeroU64;

#[track_caller]
fn conversion_error(entity: &str, reason: impl Display) -> ServiceError {
    ServiceError::new(ServiceErrorKind::Conversion {
        entity: entity.to_string(),
        reason: reason.to_string(),
    })
}

/// Convert a snowflake into a serenity id.
///
/// # Errors
///
/// Returns `ServiceErrorKind::NotFound` for id zero, which no Discord entity
/// can have. `entity` names what the id refers to in that error.
#[track_caller]
pub(crate) fn discord_id<T: From<NonZeroU64>>(entity: impl Display, id: Snowflake) -> QuillResult<T> {
    NonZeroU64::new(id.get()).map(T::from).ok_or_else(|| {
        ServiceError::new(ServiceErrorKind::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        })
        .into()
    })
}

/// Map a Discord channel type code to a channel kind.
///
/// Returns `None` for codes Discord has not documented.
///
/// # Examples
///
/// ```
/// use quill_core::ChannelKind;
/// use quill_social::channel_kind_from_code;
///
/// assert_eq!(channel_kind_from_code(0), Some(ChannelKind::GuildText));
/// assert_eq!(channel_kind_from_code(11), Some(ChannelKind::PublicThread));
/// assert_eq!(channel_kind_from_code(7), None);
/// ```
pub fn channel_kind_from_code(code: u8) -> Option<ChannelKind> {
    let kind = match code {
        0 => ChannelKind::GuildText,
        1 => ChannelKind::Dm,
        2 => ChannelKind::GuildVoice,
        3 => ChannelKind::GroupDm,
        4 => ChannelKind::GuildCategory,
        5 => ChannelKind::GuildAnnouncement,
        10 => ChannelKind::AnnouncementThread,
        11 => ChannelKind::PublicThread,
        12 => ChannelKind::PrivateThread,
        13 => ChannelKind::GuildStageVoice,
        14 => ChannelKind::GuildDirectory,
        15 => ChannelKind::GuildForum,
        16 => ChannelKind::GuildMedia,
        _ => return None,
    };
    Some(kind)
}

/// Convert a serenity user.
#[track_caller]
pub fn convert_user(user: &DiscordUser) -> QuillResult<User> {
    Ok(User::builder()
        .id(Snowflake::new(user.id.get()))
        .name(user.name.clone())
        .display_name(user.global_name.clone())
        .avatar_url(user.avatar_url())
        .bot(user.bot)
        .build()
        .map_err(|e| conversion_error("user", e))?)
}

/// Convert a serenity role.
///
/// Discord reports uncoloured roles with colour 0.
#[track_caller]
pub fn convert_role(role: &DiscordRole) -> QuillResult<Role> {
    let color = Some(role.colour.0).filter(|rgb| *rgb != 0);
    Ok(Role::builder()
        .id(Snowflake::new(role.id.get()))
        .name(role.name.clone())
        .color(color)
        .build()
        .map_err(|e| conversion_error("role", e))?)
}

/// Convert a serenity attachment.
#[track_caller]
pub fn convert_attachment(attachment: &DiscordAttachment) -> QuillResult<Attachment> {
    Ok(Attachment::builder()
        .id(Snowflake::new(attachment.id.get()))
        .filename(attachment.filename.clone())
        .url(attachment.url.clone())
        .size(u64::from(attachment.size))
        .content_type(attachment.content_type.clone())
        .build()
        .map_err(|e| conversion_error("attachment", e))?)
}

/// Convert a serenity message.
///
/// The creation time is taken from the message id.
#[track_caller]
pub fn convert_message(message: &DiscordMessage) -> QuillResult<Message> {
    let attachments = message
        .attachments
        .iter()
        .map(convert_attachment)
        .collect::<QuillResult<Vec<_>>>()?;

    Ok(Message::builder()
        .id(Snowflake::new(message.id.get()))
        .author(convert_user(&message.author)?)
        .content(message.content.clone())
        .attachments(attachments)
        .edited(message.edited_timestamp.is_some())
        .build()
        .map_err(|e| conversion_error("message", e))?)
}

/// Convert a serenity channel.
///
/// `guild` is the parent guild of a guild channel; it is ignored for
/// private channels.
///
/// # Errors
///
/// Returns `ServiceErrorKind::Conversion` for channel variants or type codes
/// this library does not know.
#[track_caller]
pub fn convert_channel(channel: &DiscordChannel, guild: Option<Guild>) -> QuillResult<Channel> {
    let (id, name, kind, guild) = match channel {
        DiscordChannel::Guild(channel) => (channel.id, channel.name.clone(), channel.kind, guild),
        DiscordChannel::Private(channel) => (channel.id, channel.name(), channel.kind, None),
        _ => {
            return Err(conversion_error("channel", "unsupported channel variant").into());
        }
    };

    let code = u8::from(kind);
    let kind = channel_kind_from_code(code).ok_or_else(|| {
        conversion_error("channel", format!("unknown channel type {}", code))
    })?;

    Ok(Channel::builder()
        .id(Snowflake::new(id.get()))
        .name(name)
        .kind(kind)
        .guild(guild)
        .build()
        .map_err(|e| conversion_error("channel", e))?)
}

/// Wrap a transcript attachment as an upload.
pub fn to_create_attachment(attachment: TranscriptAttachment) -> CreateAttachment {
    let (filename, data) = attachment.into_parts();
    CreateAttachment::bytes(data, filename)
}
