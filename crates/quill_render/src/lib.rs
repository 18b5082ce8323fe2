//! Reference HTML renderer for Quill transcripts.
//!
//! [`HtmlRenderer`] implements [`quill_core::TranscriptRenderer`] and produces
//! one self-contained HTML page per transcript. Mentions are resolved through
//! the request's resolver set, with placeholders for anything that cannot be
//! resolved, and image attachments can be inlined as `data:` URIs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod escape;
mod html;
mod images;
mod mention;

pub use escape::escape_html;
pub use html::{HtmlRenderer, human_size};
pub use images::ImageInliner;
pub use mention::{
    DELETED_CHANNEL, DELETED_ROLE, Mention, MentionScanner, MentionTable, Segment, UNKNOWN_USER,
    render_content, resolve_mentions,
};
