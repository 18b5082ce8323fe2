//! Channel and guild handles.

use crate::Snowflake;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of conversation channel.
///
/// Names follow the chat service's snake_case channel type names.
///
/// # Examples
///
/// ```
/// use quill_core::ChannelKind;
///
/// let kind: ChannelKind = "guild_voice".parse().unwrap();
/// assert_eq!(kind, ChannelKind::GuildVoice);
/// assert_eq!(ChannelKind::Dm.to_string(), "dm");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChannelKind {
    /// Guild text channel
    GuildText,
    /// Direct message between two users
    Dm,
    /// Guild voice channel
    GuildVoice,
    /// Direct message among several users
    GroupDm,
    /// Channel category
    GuildCategory,
    /// Guild announcement channel
    GuildAnnouncement,
    /// Thread inside an announcement channel
    AnnouncementThread,
    /// Public thread
    PublicThread,
    /// Private thread
    PrivateThread,
    /// Stage channel
    GuildStageVoice,
    /// Hub directory
    GuildDirectory,
    /// Forum of threads
    GuildForum,
    /// Media forum
    GuildMedia,
}

impl ChannelKind {
    /// Whether channels of this kind hold a readable message history.
    pub fn is_text_based(self) -> bool {
        matches!(
            self,
            ChannelKind::GuildText
                | ChannelKind::GuildAnnouncement
                | ChannelKind::Dm
                | ChannelKind::GroupDm
                | ChannelKind::PublicThread
                | ChannelKind::PrivateThread
                | ChannelKind::AnnouncementThread
        )
    }

    /// Whether channels of this kind live outside any guild (no role namespace).
    pub fn is_dm_based(self) -> bool {
        matches!(self, ChannelKind::Dm | ChannelKind::GroupDm)
    }
}

/// Parent community of a guild channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Guild {
    /// Guild identifier
    id: Snowflake,
    /// Guild display name
    name: String,
    /// Icon URL, if the guild has an icon
    #[builder(default)]
    #[serde(default)]
    icon_url: Option<String>,
}

impl Guild {
    /// Creates a new guild builder.
    pub fn builder() -> GuildBuilder {
        GuildBuilder::default()
    }
}

/// Handle identifying a conversation source.
///
/// # Examples
///
/// ```
/// use quill_core::{Channel, ChannelKind, Snowflake};
///
/// let channel = Channel::builder()
///     .id(Snowflake::new(10))
///     .name("general")
///     .kind(ChannelKind::GuildText)
///     .build()
///     .unwrap();
///
/// assert!(channel.is_text_based());
/// assert!(!channel.is_dm_based());
/// assert!(channel.guild().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Channel {
    /// Channel identifier
    id: Snowflake,
    /// Channel display name
    name: String,
    /// Channel kind
    kind: ChannelKind,
    /// Parent guild, absent for direct messages
    #[builder(default)]
    #[serde(default)]
    guild: Option<Guild>,
}

impl Channel {
    /// Creates a new channel builder.
    pub fn builder() -> ChannelBuilder {
        ChannelBuilder::default()
    }

    /// Whether this channel holds a readable message history.
    pub fn is_text_based(&self) -> bool {
        self.kind.is_text_based()
    }

    /// Whether this is a direct-message channel.
    pub fn is_dm_based(&self) -> bool {
        self.kind.is_dm_based()
    }
}
