//! HTML views built from posts.
//!
//! Every plain-text field (title, summary, tags, URLs) is escaped here.
//! Post content goes through [`format_content_to_html`] and is embedded
//! as-is.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::format::{escape_html, format_content_to_html};
use crate::post::Post;
use crate::util::truncate_to_date;

/// Site name used in document titles when none is configured.
pub const DEFAULT_SITE_NAME: &str = "ByteBlog";

/// Characters left alone by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Link target of a tag page, e.g. `/tag/web%20dev`.
pub fn tag_href(tag: &str) -> String {
    format!("/tag/{}", utf8_percent_encode(tag, URI_COMPONENT))
}

/// Link target of a post page.
pub fn post_href(post: &Post) -> String {
    format!("/post/{}", utf8_percent_encode(&post.id, URI_COMPONENT))
}

/// Browser title for a post page, e.g. `"Async Rust · ByteBlog"`.
pub fn document_title(post: &Post, site_name: &str) -> String {
    format!("{} · {}", post.title, site_name)
}

/// Meta description for a post page: the summary, else the title.
pub fn meta_description(post: &Post) -> &str {
    if post.summary.trim().is_empty() {
        &post.title
    } else {
        &post.summary
    }
}

/// Head fields of a standalone HTML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHead {
    pub title: String,
    pub description: Option<String>,
    pub stylesheet: Option<String>,
}

impl DocumentHead {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            stylesheet: None,
        }
    }

    /// Head for a post page, titled `"<post title> · <site name>"`.
    pub fn for_post(post: &Post, site_name: &str) -> Self {
        Self {
            title: document_title(post, site_name),
            description: Some(meta_description(post).to_string()),
            stylesheet: None,
        }
    }

    pub fn with_stylesheet(mut self, href: Option<impl Into<String>>) -> Self {
        self.stylesheet = href.map(Into::into);
        self
    }
}

/// Wrap rendered body markup in a complete HTML5 document.
pub fn render_document(head: &DocumentHead, body: &str) -> String {
    let mut doc = String::with_capacity(body.len() + 256);

    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    doc.push_str("  <meta charset=\"utf-8\">\n");
    doc.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    doc.push_str(&format!("  <title>{}</title>\n", escape_html(&head.title)));

    if let Some(description) = &head.description {
        doc.push_str(&format!(
            "  <meta name=\"description\" content=\"{}\">\n",
            escape_html(description)
        ));
    }
    if let Some(href) = &head.stylesheet {
        doc.push_str(&format!(
            "  <link rel=\"stylesheet\" href=\"{}\">\n",
            escape_html(href)
        ));
    }

    doc.push_str("</head>\n<body>\n");
    doc.push_str(body);
    if !body.ends_with('\n') {
        doc.push('\n');
    }
    doc.push_str("</body>\n</html>\n");
    doc
}

fn render_tags(out: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    out.push_str("<div class=\"tags\">");
    for tag in tags {
        out.push_str(&format!(
            "<a class=\"tag\" href=\"{}\">#{}</a>",
            escape_html(&tag_href(tag)),
            escape_html(tag)
        ));
    }
    out.push_str("</div>\n");
}

/// Render the detail view of one post.
///
/// The meta line shows the date of [`Post::timestamp`] (when present)
/// and the reading time.
pub fn render_post(post: &Post) -> String {
    let content = format_content_to_html(&post.content);
    let mut out = String::with_capacity(content.len() + 512);

    out.push_str("<article class=\"post-detail\">\n");
    if let Some(cover) = &post.cover_url {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"cover\" class=\"detail-cover\">\n",
            escape_html(cover)
        ));
    }
    out.push_str(&format!("<h1>{}</h1>\n", escape_html(&post.title)));

    let reading_time = post.reading_time();
    let meta = match post.timestamp() {
        Some(ts) => format!("{} · {}", truncate_to_date(ts), reading_time),
        None => reading_time.to_string(),
    };
    out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape_html(&meta)));

    render_tags(&mut out, &post.tags);
    out.push_str("<div class=\"content\">");
    out.push_str(&content);
    out.push_str("</div>\n</article>\n");
    out
}

/// Render a grid of post cards, or `empty_message` when there are none.
pub fn render_post_list<'a>(
    posts: impl IntoIterator<Item = &'a Post>,
    empty_message: &str,
) -> String {
    let mut out = String::new();
    let mut count = 0;

    for post in posts {
        if count == 0 {
            out.push_str("<ul class=\"post-grid\">\n");
        }
        count += 1;

        out.push_str("<li class=\"post-card\">\n");
        out.push_str(&format!(
            "<a href=\"{}\">\n",
            escape_html(&post_href(post))
        ));
        if let Some(cover) = &post.cover_url {
            out.push_str(&format!(
                "<img src=\"{}\" alt=\"cover\" class=\"cover\">\n",
                escape_html(cover)
            ));
        }
        out.push_str(&format!("<h3>{}</h3>\n", escape_html(&post.title)));
        out.push_str(&format!(
            "<p class=\"muted\">{}</p>\n",
            escape_html(&post.summary)
        ));
        out.push_str("</a>\n");
        render_tags(&mut out, &post.tags);
        out.push_str("</li>\n");
    }

    if count == 0 {
        out.push_str(&format!(
            "<p class=\"muted\">{}</p>\n",
            escape_html(empty_message)
        ));
    } else {
        out.push_str("</ul>\n");
    }
    out
}

/// Message shown on a tag page with no posts.
pub const EMPTY_TAG_MESSAGE: &str = "Nothing here yet.";

/// Render the page for one tag: a `#tag` header, the article count, and
/// the matching post cards.
pub fn render_tag_page(tag: &str, posts: &[&Post]) -> String {
    let mut out = String::from("<section>\n");
    out.push_str(&format!("<h1>#{}</h1>\n", escape_html(tag)));
    out.push_str(&format!(
        "<p class=\"muted\">{} article(s)</p>\n",
        posts.len()
    ));
    out.push_str(&render_post_list(posts.iter().copied(), EMPTY_TAG_MESSAGE));
    out.push_str("</section>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "async-rust".to_string(),
            title: "Async <Rust>".to_string(),
            summary: "Futures & friends".to_string(),
            content: "# Intro\n\nUse **tokio**.".to_string(),
            tags: vec!["rust".to_string(), "web dev".to_string()],
            cover_url: Some("https://img.example/c.png?w=1&h=2".to_string()),
            author: None,
            created_at: Some("2024-01-01T08:00:00Z".to_string()),
            updated_at: Some("2024-03-05T10:30:00Z".to_string()),
        }
    }

    #[test]
    fn test_tag_href_encodes_like_uri_component() {
        assert_eq!(tag_href("rust"), "/tag/rust");
        assert_eq!(tag_href("web dev"), "/tag/web%20dev");
        assert_eq!(tag_href("c++"), "/tag/c%2B%2B");
        assert_eq!(tag_href("it's-fine"), "/tag/it's-fine");
    }

    #[test]
    fn test_render_post_escapes_plain_fields() {
        let html = render_post(&sample_post());
        assert!(html.contains("<h1>Async &lt;Rust&gt;</h1>"));
        assert!(html.contains("src=\"https://img.example/c.png?w=1&amp;h=2\""));
        assert!(html.contains("<a class=\"tag\" href=\"/tag/web%20dev\">#web dev</a>"));
    }

    #[test]
    fn test_render_post_meta_line() {
        let html = render_post(&sample_post());
        assert!(html.contains("<p class=\"muted\">2024-03-05 · 1 min read</p>"));

        let mut undated = sample_post();
        undated.created_at = None;
        undated.updated_at = None;
        assert!(render_post(&undated).contains("<p class=\"muted\">1 min read</p>"));
    }

    #[test]
    fn test_render_post_embeds_formatted_content() {
        let html = render_post(&sample_post());
        assert!(html.contains(
            "<div class=\"content\"><p><h1>Intro</h1></p><p>Use <strong>tokio</strong>.</p></div>"
        ));
    }

    #[test]
    fn test_render_post_list() {
        let post = sample_post();
        let html = render_post_list([&post], "Nothing here yet.");
        assert!(html.starts_with("<ul class=\"post-grid\">"));
        assert!(html.contains("<a href=\"/post/async-rust\">"));
        assert!(html.contains("<h3>Async &lt;Rust&gt;</h3>"));
        assert!(html.contains("<p class=\"muted\">Futures &amp; friends</p>"));
        assert!(!html.contains("Nothing here yet."));
    }

    #[test]
    fn test_render_empty_post_list() {
        let html = render_post_list(std::iter::empty(), "Nothing here yet.");
        assert_eq!(html, "<p class=\"muted\">Nothing here yet.</p>\n");
    }

    #[test]
    fn test_document_head_for_post() {
        let mut post = sample_post();
        let head = DocumentHead::for_post(&post, DEFAULT_SITE_NAME);
        assert_eq!(head.title, "Async <Rust> · ByteBlog");
        assert_eq!(head.description.as_deref(), Some("Futures & friends"));

        post.summary = "  ".to_string();
        assert_eq!(meta_description(&post), "Async <Rust>");
    }

    #[test]
    fn test_render_document() {
        let head = DocumentHead::new("A & B").with_stylesheet(Some("/style.css"));
        let doc = render_document(&head, "<p>x</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>A &amp; B</title>"));
        assert!(doc.contains("<link rel=\"stylesheet\" href=\"/style.css\">"));
        assert!(doc.contains("<body>\n<p>x</p>\n</body>"));
        assert!(!doc.contains("name=\"description\""));
    }

    #[test]
    fn test_render_tag_page() {
        let post = sample_post();
        let html = render_tag_page("web dev", &[&post]);
        assert!(html.starts_with("<section>\n<h1>#web dev</h1>\n"));
        assert!(html.contains("<p class=\"muted\">1 article(s)</p>"));
        assert!(html.contains("<h3>Async &lt;Rust&gt;</h3>"));
        assert!(html.ends_with("</ul>\n</section>\n"));
    }

    #[test]
    fn test_render_empty_tag_page() {
        let html = render_tag_page("<none>", &[]);
        assert!(html.contains("<h1>#&lt;none&gt;</h1>"));
        assert!(html.contains("0 article(s)"));
        assert!(html.contains("<p class=\"muted\">Nothing here yet.</p>"));
    }
}
