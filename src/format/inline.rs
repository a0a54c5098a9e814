//! Paragraph-level substitutions: headings, bold, inline code.
//!
//! Uses LazyLock to compile patterns once on first use. `regex_lite`
//! matches in time linear in the input, which keeps the live preview
//! cheap even for pathological paragraphs.

use regex_lite::Regex;
use std::sync::LazyLock;

// Whitespace after a heading marker: ASCII whitespace plus the Unicode
// spaces and separators a browser's `\s` accepts.
const SPACE: &str = r"[\s\x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}]";

// Any character except a line terminator. A stray carriage return left
// over from mixed line endings never joins a heading or span, and neither
// does a Unicode line or paragraph separator.
const LINE_CHAR: &str = r"[^\r\n\x{2028}\x{2029}]";

fn heading_re(marker: &str) -> Regex {
    Regex::new(&format!("^{marker}{SPACE}({LINE_CHAR}+)$")).unwrap()
}

/// Matches a whole paragraph of the form `### text`
static HEADING_3_RE: LazyLock<Regex> = LazyLock::new(|| heading_re("###"));

/// Matches a whole paragraph of the form `## text`
static HEADING_2_RE: LazyLock<Regex> = LazyLock::new(|| heading_re("##"));

/// Matches a whole paragraph of the form `# text`
static HEADING_1_RE: LazyLock<Regex> = LazyLock::new(|| heading_re("#"));

/// Matches `**text**`, shortest span first
static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\*\*({LINE_CHAR}+?)\*\*")).unwrap());

/// Matches `` `text` `` with no backtick inside
static CODE_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Apply the paragraph substitutions to already-joined paragraph text.
///
/// Order matters and is fixed: `###`, `##`, `#` headings (whole text
/// only), then `**strong**` spans, then `` `code` `` spans.
pub(crate) fn apply_inline(text: &str) -> String {
    let text = HEADING_3_RE.replace(text, "<h3>${1}</h3>");
    let text = HEADING_2_RE.replace(&text, "<h2>${1}</h2>");
    let text = HEADING_1_RE.replace(&text, "<h1>${1}</h1>");
    let text = STRONG_RE.replace_all(&text, "<strong>${1}</strong>");
    let text = CODE_SPAN_RE.replace_all(&text, "<code>${1}</code>");
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(apply_inline("# One"), "<h1>One</h1>");
        assert_eq!(apply_inline("## Two"), "<h2>Two</h2>");
        assert_eq!(apply_inline("### Three"), "<h3>Three</h3>");
    }

    #[test]
    fn test_heading_needs_space_and_text() {
        assert_eq!(apply_inline("#NoSpace"), "#NoSpace");
        assert_eq!(apply_inline("# "), "# ");
        // Four hashes is not a recognized level
        assert_eq!(apply_inline("#### Four"), "#### Four");
    }

    #[test]
    fn test_heading_must_start_text() {
        assert_eq!(apply_inline("not # heading"), "not # heading");
    }

    #[test]
    fn test_strong_is_non_greedy() {
        assert_eq!(
            apply_inline("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_unclosed_strong_is_literal() {
        assert_eq!(apply_inline("**open only"), "**open only");
    }

    #[test]
    fn test_code_span() {
        assert_eq!(apply_inline("use `cargo` here"), "use <code>cargo</code> here");
        assert_eq!(apply_inline("empty `` ticks"), "empty `` ticks");
    }

    #[test]
    fn test_styles_inside_heading() {
        assert_eq!(
            apply_inline("## The **best** `fn`"),
            "<h2>The <strong>best</strong> <code>fn</code></h2>"
        );
    }

    #[test]
    fn test_unicode_space_after_heading_marker() {
        assert_eq!(apply_inline("#\u{a0}Title"), "<h1>Title</h1>");
        assert_eq!(apply_inline("##\u{3000}Zwei"), "<h2>Zwei</h2>");
        assert_eq!(apply_inline("###\u{2009}Thin"), "<h3>Thin</h3>");
    }

    #[test]
    fn test_line_separator_blocks_heading_and_strong() {
        assert_eq!(apply_inline("# a\u{2028}b"), "# a\u{2028}b");
        assert_eq!(apply_inline("**a\u{2029}b**"), "**a\u{2029}b**");
        assert_eq!(
            apply_inline("**a\u{2028}b** and `c`"),
            "**a\u{2028}b** and <code>c</code>"
        );
    }

    #[test]
    fn test_carriage_return_blocks_heading() {
        assert_eq!(apply_inline("# Title\r"), "# Title\r");
    }
}
