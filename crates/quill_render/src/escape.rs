//! HTML escaping.

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Examples
///
/// ```
/// use quill_render::escape_html;
///
/// assert_eq!(escape_html("<b>\"hi\" & 'bye'</b>"), "&lt;b&gt;&quot;hi&quot; &amp; &#39;bye&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(escape_html("hello world"), "hello world");
    }

    #[test]
    fn test_ampersand_is_escaped_once() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }
}
