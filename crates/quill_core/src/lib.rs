//! Core data types and collaborator traits for the Quill transcript library.
//!
//! This crate provides the vocabulary shared by every Quill crate:
//! - messages, channels and mentionable entities
//! - the [`ChatService`] trait implemented by remote chat platforms
//! - the [`TranscriptRenderer`] trait implemented by document renderers
//! - the [`ResolverSet`] handed to renderers for mention resolution

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod entity;
mod message;
mod render;
mod resolver;
mod service;
mod snowflake;

pub use channel::{Channel, ChannelBuilder, ChannelKind, Guild, GuildBuilder};
pub use entity::{EntityKind, Role, RoleBuilder, User, UserBuilder};
pub use message::{
    Attachment, AttachmentBuilder, Message, MessageBuilder, MessageBuilderError, MessageSequence,
};
pub use render::{Favicon, RenderRequest, TranscriptRenderer};
pub use resolver::{Resolver, ResolverOverrides, ResolverSet, null_resolver, resolver_fn};
pub use service::{ChatService, MAX_PAGE_SIZE, PageRequest};
pub use snowflake::{DISCORD_EPOCH_MS, Snowflake};
