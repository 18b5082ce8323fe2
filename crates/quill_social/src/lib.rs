//! Chat platform bindings for Quill.
//!
//! Each platform implements [`quill_core::ChatService`] so the transcript
//! pipeline can page through its history and resolve mentions against it.
//!
//! # Platform Support
//!
//! Each platform is feature-gated and lives in its own submodule:
//! - `discord` - Discord REST binding over serenity (requires `discord` feature)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "discord")]
mod discord;

#[cfg(feature = "discord")]
pub use discord::{
    DiscordChatService, channel_kind_from_code, convert_attachment, convert_channel,
    convert_message, convert_role, convert_user, to_create_attachment,
};
