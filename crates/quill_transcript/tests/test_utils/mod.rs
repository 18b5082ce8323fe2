//! Test utilities for Quill transcript tests.
//!
//! This module provides mock implementations and test helpers.

pub mod mock_service;
pub mod recording_renderer;

#[allow(unused_imports)]
pub use mock_service::MockChatService;
#[allow(unused_imports)]
pub use recording_renderer::{FailingRenderer, RecordedRender, RecordingRenderer};

use quill_core::{Channel, ChannelKind, Guild, Message, Snowflake, User};

/// Guild every test channel belongs to.
pub const TEST_GUILD_ID: u64 = 900;

/// Helper to create a test author.
#[allow(dead_code)]
pub fn create_test_user(id: u64) -> User {
    User::builder()
        .id(Snowflake::new(id))
        .name(format!("user-{id}"))
        .build()
        .expect("Failed to build user")
}

/// Helper to create a message with a fixed author.
#[allow(dead_code)]
pub fn create_test_message(id: u64, content: &str) -> Message {
    Message::builder()
        .id(Snowflake::new(id))
        .author(create_test_user(1))
        .content(content)
        .build()
        .expect("Failed to build message")
}

/// Helper to create a channel of the given kind.
///
/// Guild kinds get a parent guild, DM kinds get none.
#[allow(dead_code)]
pub fn create_test_channel(id: u64, kind: ChannelKind) -> Channel {
    let guild = if kind.is_dm_based() {
        None
    } else {
        Some(
            Guild::builder()
                .id(Snowflake::new(TEST_GUILD_ID))
                .name("test guild")
                .build()
                .expect("Failed to build guild"),
        )
    };

    Channel::builder()
        .id(Snowflake::new(id))
        .name(format!("channel-{id}"))
        .kind(kind)
        .guild(guild)
        .build()
        .expect("Failed to build channel")
}
