//! Backward pagination over a channel's message history.
//!
//! The walk starts at the newest message and repeatedly asks the service for
//! the page immediately older than the oldest message seen so far. Pages come
//! back newest-first, so the concatenation of all pages is newest-first as
//! well; a single reversal at the end yields chronological order.

use quill_core::{ChatService, MAX_PAGE_SIZE, Message, PageRequest, Snowflake};
use quill_error::QuillResult;
use std::collections::HashSet;
use tracing::{debug, error, info, instrument, warn};

/// How many messages to retrieve.
///
/// # Examples
///
/// ```
/// use quill_transcript::FetchLimit;
///
/// assert_eq!(FetchLimit::default(), FetchLimit::Unbounded);
/// assert_eq!(FetchLimit::from(Some(250)), FetchLimit::Bounded(250));
/// assert_eq!(FetchLimit::from(None), FetchLimit::Unbounded);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchLimit {
    /// At most this many messages
    Bounded(usize),
    /// Everything the channel holds
    #[default]
    Unbounded,
}

impl FetchLimit {
    /// Upper bound, or `None` when unbounded.
    pub fn bound(self) -> Option<usize> {
        match self {
            FetchLimit::Bounded(limit) => Some(limit),
            FetchLimit::Unbounded => None,
        }
    }
}

impl From<usize> for FetchLimit {
    fn from(limit: usize) -> Self {
        FetchLimit::Bounded(limit)
    }
}

impl From<Option<usize>> for FetchLimit {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(FetchLimit::Unbounded, FetchLimit::Bounded)
    }
}

/// Retrieve up to `limit` of the most recent messages of a channel, oldest first.
///
/// Pages are requested strictly one after another since each request is
/// bounded by the cursor the previous page produced. The walk ends when the
/// limit is reached or the service returns an empty page. A failed page fetch
/// aborts the whole walk; no partial history is returned.
///
/// # Errors
///
/// Returns the first error reported by [`ChatService::fetch_messages`].
#[instrument(
    skip(service),
    fields(
        platform = service.platform(),
        channel_id = %channel_id,
        pages,
        message_count
    )
)]
pub async fn fetch_history<S>(
    service: &S,
    channel_id: Snowflake,
    limit: FetchLimit,
) -> QuillResult<Vec<Message>>
where
    S: ChatService + ?Sized,
{
    let mut remaining = limit.bound();
    let mut accumulated: Vec<Message> = Vec::new();
    let mut seen: HashSet<Snowflake> = HashSet::new();
    let mut cursor: Option<Snowflake> = None;
    let mut pages = 0usize;

    while remaining.is_none_or(|left| left > 0) {
        let page_size = remaining.map_or(MAX_PAGE_SIZE, |left| left.min(MAX_PAGE_SIZE));
        let request = PageRequest::new(page_size).with_before(cursor);

        debug!(page_size, cursor = ?cursor, "Fetching history page");
        let page = service
            .fetch_messages(channel_id, request)
            .await
            .map_err(|e| {
                error!(channel_id = %channel_id, cursor = ?cursor, error = %e, "History page fetch failed");
                e
            })?;
        pages += 1;

        if page.is_empty() {
            debug!("Empty page, channel exhausted");
            break;
        }

        let before_len = accumulated.len();
        let mut oldest = cursor;
        for message in page.into_iter().take(page_size) {
            let id = *message.id();
            oldest = Some(id);
            if seen.insert(id) {
                accumulated.push(message);
            } else {
                warn!(message_id = %id, "Dropping duplicate message");
            }
        }

        if accumulated.len() == before_len {
            warn!(cursor = ?cursor, "Page held no new messages, stopping");
            break;
        }

        if let Some(left) = remaining.as_mut() {
            *left -= page_size;
        }
        cursor = oldest;
    }

    accumulated.reverse();

    tracing::Span::current().record("pages", pages);
    tracing::Span::current().record("message_count", accumulated.len());
    info!(pages, message_count = accumulated.len(), "Fetched channel history");

    Ok(accumulated)
}
