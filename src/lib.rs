//! # byteblog
//!
//! Content formatting for the ByteBlog developer blog: turns the raw text
//! an author types into display HTML, estimates reading time, and renders
//! post pages and listings.
//!
//! ## Features
//!
//! - A small Markdown subset: paragraphs, `#`/`##`/`###` headings,
//!   `**strong**`, `` `code` ``, and fenced code blocks
//! - Reading-time estimates at 200 words per minute
//! - Post records, draft validation, tag and search filters
//! - Post detail pages, card listings, and standalone HTML documents
//!
//! ## Quick Start
//!
//! ```
//! use byteblog::{estimate_reading_time, format_content_to_html};
//!
//! let raw = "# Hello\n\nThis is **bold** and `code`.";
//! assert_eq!(
//!     format_content_to_html(raw),
//!     "<p><h1>Hello</h1></p><p>This is <strong>bold</strong> and <code>code</code>.</p>"
//! );
//! assert_eq!(estimate_reading_time(raw), "1 min read");
//! ```
//!
//! ## Working with Posts
//!
//! ```
//! use byteblog::{PostCollection, PostDraft, page};
//!
//! let draft = PostDraft::from_json(
//!     r#"{"title": "Ownership basics", "content": "Every value has one owner.", "tags": "rust, basics"}"#,
//! )?;
//! let post = draft.into_post("ownership-basics")?;
//!
//! let posts = PostCollection::new(vec![post]);
//! let listing = page::render_post_list(posts.with_tag("rust"), "Nothing here yet.");
//! assert!(listing.contains("<h3>Ownership basics</h3>"));
//! # Ok::<(), byteblog::Error>(())
//! ```
//!
//! Formatted output only escapes fenced code. It is meant for posts by
//! trusted authors; add an allow-list sanitizer before rendering content
//! from untrusted ones.

#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod format;
pub mod page;
pub mod post;
pub mod reading;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use format::{escape_html, format_content_to_html};
pub use post::{Post, PostCollection, PostDraft, TagInput, parse_tags, slugify, sort_recent};
pub use reading::{ReadingTime, WORDS_PER_MINUTE, estimate_reading_time};
