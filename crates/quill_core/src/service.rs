//! Remote chat service interface.

use crate::{Channel, Message, Role, Snowflake, User};
use async_trait::async_trait;
use derive_getters::Getters;
use quill_error::QuillResult;
use serde::{Deserialize, Serialize};

/// Largest page the remote service returns for a single history request.
pub const MAX_PAGE_SIZE: usize = 100;

/// Bounds for one history request.
///
/// # Examples
///
/// ```
/// use quill_core::{PageRequest, Snowflake};
///
/// let first = PageRequest::new(100);
/// assert!(first.before().is_none());
///
/// let next = PageRequest::new(50).before_id(Snowflake::new(900));
/// assert_eq!(*next.limit(), 50);
/// assert_eq!(*next.before(), Some(Snowflake::new(900)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct PageRequest {
    /// Maximum number of messages to return, at most [`MAX_PAGE_SIZE`]
    limit: usize,
    /// Only return messages strictly older than this identifier
    before: Option<Snowflake>,
}

impl PageRequest {
    /// Request the newest `limit` messages, capped at [`MAX_PAGE_SIZE`].
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(MAX_PAGE_SIZE),
            before: None,
        }
    }

    /// Restrict the request to messages older than `cursor`.
    pub fn before_id(mut self, cursor: Snowflake) -> Self {
        self.before = Some(cursor);
        self
    }

    /// Set or clear the cursor.
    pub fn with_before(mut self, cursor: Option<Snowflake>) -> Self {
        self.before = cursor;
        self
    }
}

/// A remote chat service holding channels, their history and the entities
/// mentioned in it.
///
/// Implementations own the network connection. Every method is a suspension
/// point and may fail; the transcript pipeline decides which failures are
/// fatal.
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Service name (e.g., "discord").
    fn platform(&self) -> &str;

    /// Fetch one page of history, ordered newest-first.
    ///
    /// When `request.before()` is set, every returned message must be strictly
    /// older than it.
    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        request: PageRequest,
    ) -> QuillResult<Vec<Message>>;

    /// Look up a user account.
    async fn fetch_user(&self, user_id: Snowflake) -> QuillResult<User>;

    /// Look up a role within a guild.
    async fn fetch_role(&self, guild_id: Snowflake, role_id: Snowflake) -> QuillResult<Role>;

    /// Look up a channel.
    async fn fetch_channel(&self, channel_id: Snowflake) -> QuillResult<Channel>;
}
