//! Discord binding for Quill.
//!
//! - **conversions**: serenity models into Quill models, transcript
//!   attachments into uploads
//! - **service**: [`DiscordChatService`], the REST-backed chat service

mod conversions;
mod service;

pub use conversions::{
    channel_kind_from_code, convert_attachment, convert_channel, convert_message, convert_role,
    convert_user, to_create_attachment,
};
pub use service::DiscordChatService;
