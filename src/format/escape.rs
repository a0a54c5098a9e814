//! HTML escaping for literal text.

use std::borrow::Cow;

/// Escape the five HTML-reserved characters in `text`.
///
/// | Character | Entity   |
/// |-----------|----------|
/// | `&`       | `&amp;`  |
/// | `<`       | `&lt;`   |
/// | `>`       | `&gt;`   |
/// | `"`       | `&quot;` |
/// | `'`       | `&#039;` |
///
/// The scan is a single pass, so entities produced for one character are
/// never escaped again. Returns the input unchanged (borrowed) when it
/// contains none of the reserved characters.
///
/// # Examples
///
/// ```
/// use byteblog::format::escape_html;
///
/// assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#039;y&#039;&lt;/b&gt;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(is_reserved) else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 8);
    result.push_str(&text[..first]);

    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    Cow::Owned(result)
}

fn is_reserved(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_each_reserved_char() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_escape_does_not_double_escape() {
        // An existing entity is treated as literal text
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
    }

    #[test]
    fn test_escape_borrows_clean_text() {
        assert!(matches!(escape_html("nothing to do"), Cow::Borrowed(_)));
        assert!(matches!(escape_html(""), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_preserves_unicode() {
        assert_eq!(escape_html("café <über>"), "café &lt;über&gt;");
    }
}
