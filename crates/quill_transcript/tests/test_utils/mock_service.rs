//! Mock chat service for testing without network calls.

use super::{create_test_channel, create_test_message, create_test_user};
use async_trait::async_trait;
use quill_core::{Channel, ChannelKind, ChatService, Message, PageRequest, Role, Snowflake, User};
use quill_error::{QuillResult, ServiceError, ServiceErrorKind};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory chat service with one channel.
///
/// Pages are served newest-first like the real service. Every history
/// request and every entity lookup is recorded so tests can assert on the
/// exact calls made.
#[derive(Debug, Default)]
pub struct MockChatService {
    /// Channel history, any order
    messages: Vec<Message>,
    /// Zero-based page index whose fetch fails
    fail_page: Option<usize>,
    /// Whether user lookups fail
    fail_users: bool,
    /// Serve the newest page on every request, cursor or not
    ignore_cursor: bool,
    requests: Mutex<Vec<PageRequest>>,
    user_calls: AtomicUsize,
    role_calls: AtomicUsize,
    channel_calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockChatService {
    /// Channel holding messages with ids `10, 20, ..., count * 10`.
    pub fn with_message_count(count: u64) -> Self {
        let messages = (1..=count)
            .map(|id| create_test_message(id * 10, &format!("message {id}")))
            .collect();
        Self::with_messages(messages)
    }

    /// Channel holding the given messages.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Fail the fetch of the given zero-based page.
    pub fn failing_page(mut self, page: usize) -> Self {
        self.fail_page = Some(page);
        self
    }

    /// Fail every user lookup.
    pub fn failing_users(mut self) -> Self {
        self.fail_users = true;
        self
    }

    /// Ignore the cursor and always serve the newest messages.
    pub fn ignoring_cursor(mut self) -> Self {
        self.ignore_cursor = true;
        self
    }

    /// History requests made so far, in order.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().expect("Lock poisoned").clone()
    }

    /// Number of user lookups made.
    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Number of role lookups made.
    pub fn role_calls(&self) -> usize {
        self.role_calls.load(Ordering::SeqCst)
    }

    /// Number of channel lookups made.
    pub fn channel_calls(&self) -> usize {
        self.channel_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatService for MockChatService {
    fn platform(&self) -> &str {
        "mock"
    }

    async fn fetch_messages(
        &self,
        channel_id: Snowflake,
        request: PageRequest,
    ) -> QuillResult<Vec<Message>> {
        let page_index = {
            let mut requests = self.requests.lock().expect("Lock poisoned");
            requests.push(request);
            requests.len() - 1
        };

        if self.fail_page == Some(page_index) {
            return Err(ServiceError::new(ServiceErrorKind::FetchMessages {
                channel_id: channel_id.to_string(),
                reason: "connection reset".to_string(),
            })
            .into());
        }

        let cursor = if self.ignore_cursor {
            None
        } else {
            *request.before()
        };

        let mut page: Vec<Message> = self
            .messages
            .iter()
            .filter(|message| cursor.is_none_or(|before| *message.id() < before))
            .cloned()
            .collect();
        page.sort_by(|a, b| b.id().cmp(a.id()));
        page.truncate(*request.limit());
        Ok(page)
    }

    async fn fetch_user(&self, user_id: Snowflake) -> QuillResult<User> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_users {
            return Err(ServiceError::new(ServiceErrorKind::Lookup {
                entity: "user".to_string(),
                id: user_id.to_string(),
                reason: "rate limited".to_string(),
            })
            .into());
        }
        Ok(create_test_user(user_id.get()))
    }

    async fn fetch_role(&self, _guild_id: Snowflake, role_id: Snowflake) -> QuillResult<Role> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Role::builder()
            .id(role_id)
            .name(format!("role-{role_id}"))
            .build()
            .expect("Failed to build role"))
    }

    async fn fetch_channel(&self, channel_id: Snowflake) -> QuillResult<Channel> {
        self.channel_calls.fetch_add(1, Ordering::SeqCst);
        Ok(create_test_channel(channel_id.get(), ChannelKind::GuildText))
    }
}
