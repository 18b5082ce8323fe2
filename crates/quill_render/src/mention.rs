//! Mention tokens embedded in message content.
//!
//! Discord encodes mentions inline: `<@id>` or `<@!id>` for users, `<@&id>`
//! for roles and `<#id>` for channels. [`MentionScanner`] splits content into
//! literal text and mention segments; [`resolve_mentions`] looks every
//! distinct mention up once, concurrently, through a [`ResolverSet`].

use crate::escape_html;
use futures::future::join_all;
use quill_core::{ResolverSet, Snowflake};
use quill_error::{QuillResult, RenderError};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

const MENTION_PATTERN: &str = r"<(@!?|@&|#)(\d{1,20})>";

/// Placeholder for a user mention that could not be resolved.
pub const UNKNOWN_USER: &str = "@Unknown User";
/// Placeholder for a role mention that could not be resolved.
pub const DELETED_ROLE: &str = "@deleted-role";
/// Placeholder for a channel mention that could not be resolved.
pub const DELETED_CHANNEL: &str = "#deleted-channel";

/// A mention token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mention {
    /// `<@id>` or `<@!id>`
    User(Snowflake),
    /// `<@&id>`
    Role(Snowflake),
    /// `<#id>`
    Channel(Snowflake),
}

/// A piece of message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, not yet escaped
    Text(&'a str),
    /// A mention token
    Mention(Mention),
}

/// Splits message content into text and mentions.
#[derive(Debug, Clone)]
pub struct MentionScanner {
    pattern: Regex,
}

impl MentionScanner {
    /// Compile the mention pattern.
    pub fn new() -> QuillResult<Self> {
        let pattern = Regex::new(MENTION_PATTERN)
            .map_err(|e| RenderError::new(format!("Invalid mention pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    /// Split `content` into segments, in order.
    ///
    /// Tokens whose id does not fit a snowflake are kept as text.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill_core::Snowflake;
    /// use quill_render::{Mention, MentionScanner, Segment};
    ///
    /// let scanner = MentionScanner::new().unwrap();
    /// let segments = scanner.segments("hi <@!5>, see <#9>");
    /// assert_eq!(segments[1], Segment::Mention(Mention::User(Snowflake::new(5))));
    /// assert_eq!(segments[3], Segment::Mention(Mention::Channel(Snowflake::new(9))));
    /// ```
    pub fn segments<'a>(&self, content: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last = 0;

        for captures in self.pattern.captures_iter(content) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let Ok(id) = captures[2].parse::<u64>() else {
                continue;
            };
            let id = Snowflake::new(id);
            let mention = match &captures[1] {
                "@&" => Mention::Role(id),
                "#" => Mention::Channel(id),
                _ => Mention::User(id),
            };

            if whole.start() > last {
                segments.push(Segment::Text(&content[last..whole.start()]));
            }
            segments.push(Segment::Mention(mention));
            last = whole.end();
        }

        if last < content.len() {
            segments.push(Segment::Text(&content[last..]));
        }
        segments
    }

    /// Every distinct mention in `contents`.
    pub fn distinct<'a>(&self, contents: impl IntoIterator<Item = &'a str>) -> HashSet<Mention> {
        contents
            .into_iter()
            .flat_map(|content| self.segments(content))
            .filter_map(|segment| match segment {
                Segment::Mention(mention) => Some(mention),
                Segment::Text(_) => None,
            })
            .collect()
    }
}

/// Rendered HTML for each mention.
pub type MentionTable = HashMap<Mention, String>;

/// Resolve each mention once and render it as an HTML span.
///
/// Lookups run concurrently. A mention the resolvers cannot answer renders
/// as its placeholder.
#[instrument(skip_all, fields(mentions = mentions.len()))]
pub async fn resolve_mentions(
    mentions: HashSet<Mention>,
    resolvers: &ResolverSet,
) -> MentionTable {
    let lookups = mentions.into_iter().map(|mention| async move {
        let html = match mention {
            Mention::User(id) => {
                let name = resolvers
                    .resolve_user(id)
                    .await
                    .map(|user| format!("@{}", user.shown_name()));
                mention_span("user", name.as_deref().unwrap_or(UNKNOWN_USER), None)
            }
            Mention::Role(id) => match resolvers.resolve_role(id).await {
                Some(role) => {
                    mention_span("role", &format!("@{}", role.name()), *role.color())
                }
                None => mention_span("role", DELETED_ROLE, None),
            },
            Mention::Channel(id) => {
                let name = resolvers
                    .resolve_channel(id)
                    .await
                    .map(|channel| format!("#{}", channel.name()));
                mention_span("channel", name.as_deref().unwrap_or(DELETED_CHANNEL), None)
            }
        };
        (mention, html)
    });

    let table: MentionTable = join_all(lookups).await.into_iter().collect();
    debug!(resolved = table.len(), "Resolved mentions");
    table
}

fn mention_span(class: &str, label: &str, color: Option<u32>) -> String {
    match color {
        Some(rgb) => format!(
            "<span class=\"mention {class}\" style=\"color: #{rgb:06x}\">{}</span>",
            escape_html(label)
        ),
        None => format!("<span class=\"mention {class}\">{}</span>", escape_html(label)),
    }
}

/// Render message content as HTML, substituting resolved mentions.
pub fn render_content(scanner: &MentionScanner, content: &str, table: &MentionTable) -> String {
    scanner
        .segments(content)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => escape_html(text).replace('\n', "<br>"),
            Segment::Mention(mention) => table.get(&mention).cloned().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::{Role, User, null_resolver, resolver_fn};

    fn scanner() -> MentionScanner {
        MentionScanner::new().unwrap()
    }

    #[test]
    fn test_segments_cover_all_kinds() {
        let segments = scanner().segments("<@1><@!2><@&3><#4>");
        assert_eq!(
            segments,
            vec![
                Segment::Mention(Mention::User(Snowflake::new(1))),
                Segment::Mention(Mention::User(Snowflake::new(2))),
                Segment::Mention(Mention::Role(Snowflake::new(3))),
                Segment::Mention(Mention::Channel(Snowflake::new(4))),
            ]
        );
    }

    #[test]
    fn test_malformed_tokens_stay_text() {
        let segments = scanner().segments("<@abc> <@&> <#99999999999999999999>");
        assert!(
            segments
                .iter()
                .all(|segment| matches!(segment, Segment::Text(_)))
        );
    }

    #[test]
    fn test_distinct_collapses_repeats() {
        let found = scanner().distinct(["<@1> <@!1>", "<@1> <#2>"]);
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn test_unresolved_mentions_use_placeholders() {
        let scanner = scanner();
        let content = "<@1> <@&2> <#3>";
        let table = resolve_mentions(scanner.distinct([content]), &ResolverSet::unresolved()).await;
        let html = render_content(&scanner, content, &table);

        assert!(html.contains(UNKNOWN_USER));
        assert!(html.contains(DELETED_ROLE));
        assert!(html.contains(DELETED_CHANNEL));
    }

    #[tokio::test]
    async fn test_resolved_mentions_are_escaped_and_coloured() {
        let resolvers = ResolverSet::new(
            null_resolver(),
            resolver_fn(|id| async move { User::builder().id(id).name("<ferris>").build().ok() }),
            resolver_fn(|id| async move {
                Role::builder()
                    .id(id)
                    .name("mods")
                    .color(Some(0x3498db))
                    .build()
                    .ok()
            }),
        );
        let scanner = scanner();
        let content = "ping <@7> and <@&8> & co";
        let table = resolve_mentions(scanner.distinct([content]), &resolvers).await;
        let html = render_content(&scanner, content, &table);

        assert!(html.contains("@&lt;ferris&gt;"));
        assert!(html.contains("color: #3498db"));
        assert!(html.ends_with(" &amp; co"));
    }
}
