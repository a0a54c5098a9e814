//! Line scanner that turns post content into HTML.
//!
//! Pure string accumulation: no I/O and no state outside a single call.

use std::borrow::Cow;

use super::escape::escape_html;
use super::inline::apply_inline;

const FENCE: &str = "```";
const TAB_WIDTH: usize = 4;

/// Scanner state for one formatting pass.
struct RenderContext<'a> {
    // Accumulated output
    output: String,
    // Consecutive non-blank lines awaiting a flush
    paragraph: Vec<Cow<'a, str>>,
    in_code: bool,
}

impl<'a> RenderContext<'a> {
    fn new(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            paragraph: Vec::new(),
            in_code: false,
        }
    }

    fn render(mut self, raw: &'a str) -> String {
        for line in split_lines(raw) {
            self.push_line(expand_tabs(line));
        }

        self.flush_paragraph();
        // Unterminated fences are closed rather than rejected
        if self.in_code {
            self.output.push_str("</code></pre>");
        }

        self.output
    }

    fn push_line(&mut self, line: Cow<'a, str>) {
        let trimmed = line.trim();

        if trimmed.starts_with(FENCE) {
            self.toggle_fence();
            return;
        }

        if self.in_code {
            self.output.push_str(&escape_html(&line));
            self.output.push('\n');
        } else if trimmed.is_empty() {
            self.flush_paragraph();
        } else {
            self.paragraph.push(line);
        }
    }

    fn toggle_fence(&mut self) {
        if self.in_code {
            self.output.push_str("</code></pre>");
            self.in_code = false;
        } else {
            self.flush_paragraph();
            self.output.push_str("<pre><code>");
            self.in_code = true;
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }

        let text = self.paragraph.join(" ");
        self.output.push_str("<p>");
        self.output.push_str(&apply_inline(&text));
        self.output.push_str("</p>");
        self.paragraph.clear();
    }
}

/// Split on LF, dropping the CR of a CRLF pair.
///
/// Unlike [`str::lines`], a trailing line break yields a final empty line,
/// which matters inside a code block.
fn split_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Replace every tab in the line with four spaces.
fn expand_tabs(line: &str) -> Cow<'_, str> {
    if line.contains('\t') {
        Cow::Owned(line.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(line)
    }
}

/// Convert post content into display HTML.
///
/// Recognized markup:
///
/// - Paragraphs: consecutive non-blank lines joined with a single space
///   and wrapped in `<p>`; blank lines separate paragraphs
/// - Headings: a paragraph that is exactly `# text`, `## text` or
///   `### text` becomes `<h1>`..`<h3>` (inside the `<p>`)
/// - `**strong**` and `` `code` `` spans within paragraphs
/// - Fenced code blocks delimited by lines starting with three
///   backticks, emitted as `<pre><code>` with HTML-escaped content
///
/// A fence left open at the end of input is closed automatically.
/// Paragraph text is not escaped; the output is meant for trusted authors.
///
/// # Examples
///
/// ```
/// use byteblog::format::format_content_to_html;
///
/// assert_eq!(format_content_to_html(""), "");
/// assert_eq!(format_content_to_html("# Title"), "<p><h1>Title</h1></p>");
/// assert_eq!(
///     format_content_to_html("```\n<b>x</b>\n```"),
///     "<pre><code>&lt;b&gt;x&lt;/b&gt;\n</code></pre>"
/// );
/// ```
pub fn format_content_to_html(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    RenderContext::new(raw.len() + raw.len() / 4).render(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        let lines: Vec<_> = split_lines("a\r\nb\nc").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_lines_keeps_trailing_empty() {
        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx"), "    x");
        assert_eq!(expand_tabs("\t\tx"), "        x");
        assert_eq!(expand_tabs(" \tx"), "     x");
        assert_eq!(expand_tabs("a\tb"), "a    b");
        assert!(matches!(expand_tabs("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_inner_tab_in_code_block() {
        assert_eq!(
            format_content_to_html("```\na\tb\n```"),
            "<pre><code>a    b\n</code></pre>"
        );
    }

    #[test]
    fn test_unicode_space_heading() {
        assert_eq!(
            format_content_to_html("#\u{a0}Title"),
            "<p><h1>Title</h1></p>"
        );
        assert_eq!(
            format_content_to_html("# a\u{2028}b"),
            "<p># a\u{2028}b</p>"
        );
    }

    #[test]
    fn test_simple_paragraph() {
        assert_eq!(format_content_to_html("Hello, World!"), "<p>Hello, World!</p>");
    }

    #[test]
    fn test_paragraph_merging() {
        assert_eq!(
            format_content_to_html("first line\nsecond line"),
            "<p>first line second line</p>"
        );
        assert_eq!(
            format_content_to_html("first\n\nsecond"),
            "<p>first</p><p>second</p>"
        );
    }

    #[test]
    fn test_whitespace_only_line_separates_paragraphs() {
        assert_eq!(format_content_to_html("a\n   \t\nb"), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_heading_only_for_single_line_paragraph() {
        assert_eq!(format_content_to_html("## Setup"), "<p><h2>Setup</h2></p>");
        assert_eq!(
            format_content_to_html("# Title\nmore text"),
            "<p># Title more text</p>"
        );
    }

    #[test]
    fn test_code_block_is_escaped_and_literal() {
        let html = format_content_to_html("```\nlet x = **y** && `z`;\n```");
        assert_eq!(
            html,
            "<pre><code>let x = **y** &amp;&amp; `z`;\n</code></pre>"
        );
    }

    #[test]
    fn test_fence_flushes_pending_paragraph() {
        assert_eq!(
            format_content_to_html("intro\n```rust\nfn main() {}\n```\noutro"),
            "<p>intro</p><pre><code>fn main() {}\n</code></pre><p>outro</p>"
        );
    }

    #[test]
    fn test_indented_fence_is_recognized() {
        assert_eq!(
            format_content_to_html("  ```\ncode\n\t```"),
            "<pre><code>code\n</code></pre>"
        );
    }

    #[test]
    fn test_code_block_keeps_blank_lines_and_tabs() {
        assert_eq!(
            format_content_to_html("```\n\tindented\n\nafter\n```"),
            "<pre><code>    indented\n\nafter\n</code></pre>"
        );
    }

    #[test]
    fn test_unterminated_fence_is_closed() {
        assert_eq!(
            format_content_to_html("```\nfoo"),
            "<pre><code>foo\n</code></pre>"
        );
    }

    #[test]
    fn test_trailing_newline_inside_open_fence() {
        assert_eq!(
            format_content_to_html("```\nfoo\n"),
            "<pre><code>foo\n\n</code></pre>"
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(
            format_content_to_html("# Title\r\n\r\nBody"),
            "<p><h1>Title</h1></p><p>Body</p>"
        );
    }

    #[test]
    fn test_paragraph_text_is_not_escaped() {
        assert_eq!(
            format_content_to_html("<em>trusted</em>"),
            "<p><em>trusted</em></p>"
        );
    }
}
