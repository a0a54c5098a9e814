//! Post records, editor drafts, and listing filters.
//!
//! Field names follow the JSON the blog backend emits (`coverUrl`,
//! `createdAt`, ...), so an export of `GET /api/posts` loads directly
//! into a [`PostCollection`].

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::format::format_content_to_html;
use crate::reading::ReadingTime;
use crate::util::read_text;

/// Shortest accepted title, in characters, after trimming.
pub const MIN_TITLE_CHARS: usize = 4;

/// Shortest accepted body, in characters, after trimming.
pub const MIN_CONTENT_CHARS: usize = 20;

/// A published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    /// One-sentence overview shown on cards; the editor calls it a subtitle.
    #[serde(default, alias = "subtitle", deserialize_with = "null_as_default")]
    pub summary: String,
    /// Raw content as the author typed it.
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, alias = "imageUrl")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// RFC 3339 creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 time of the last edit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Post {
    /// The welcome post shown when nothing has been published yet.
    pub fn sample() -> Self {
        Self {
            id: slugify("Welcome to ByteBlog"),
            title: "Welcome to ByteBlog".to_string(),
            summary: "A lightweight developer-focused blog".to_string(),
            content: "## Hello, developer!\n\n\
                      This is a demo article. Click Write to publish your own.\n\n\
                      Posts support **bold** text, `inline code`, and fenced code blocks.\n\n\
                      Happy shipping!"
                .to_string(),
            tags: vec!["welcome".to_string(), "demo".to_string()],
            cover_url: None,
            author: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Parse one post from JSON.
    ///
    /// Accepts either a bare post object or the backend's
    /// `{"post": {...}}` envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let post = match value {
            serde_json::Value::Object(mut map) if map.contains_key("post") => {
                let post = map.remove("post").unwrap_or_default();
                serde_json::from_value(post)?
            }
            other => serde_json::from_value(other)?,
        };
        Ok(post)
    }

    /// Estimated reading time of the content.
    pub fn reading_time(&self) -> ReadingTime {
        ReadingTime::from_text(&self.content)
    }

    /// The content rendered for display.
    pub fn content_html(&self) -> String {
        format_content_to_html(&self.content)
    }

    /// The time shown for the post: last edit, else creation.
    pub fn timestamp(&self) -> Option<&str> {
        self.updated_at
            .as_deref()
            .or(self.created_at.as_deref())
    }

    /// Whether the post carries exactly this tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive search over title, tags and summary.
    ///
    /// A blank query matches every post.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&query)
            || self.tags.join(" ").to_lowercase().contains(&query)
            || self.summary.to_lowercase().contains(&query)
    }
}

/// Sort posts newest first by [`Post::timestamp`].
///
/// Posts without a timestamp go last; ties keep their input order.
/// Timestamps compare as strings, which orders RFC 3339 values written
/// in the same offset correctly.
pub fn sort_recent<P: Borrow<Post>>(posts: &mut [P]) {
    posts.sort_by(|a, b| b.borrow().timestamp().cmp(&a.borrow().timestamp()));
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
///
/// # Examples
///
/// ```
/// use byteblog::parse_tags;
///
/// assert_eq!(parse_tags(" rust, wasm ,,web "), vec!["rust", "wasm", "web"]);
/// assert!(parse_tags("").is_empty());
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Generate a URL slug from text.
///
/// Converts text to lowercase, replaces spaces and separators with hyphens,
/// and removes consecutive/leading/trailing hyphens. Characters outside
/// ASCII letters and digits are dropped.
///
/// # Examples
///
/// ```
/// use byteblog::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  A practical guide to  Rust "), "a-practical-guide-to-rust");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Tags as submitted by a form: either a list or one comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    List(Vec<String>),
    Text(String),
}

impl Default for TagInput {
    fn default() -> Self {
        TagInput::Text(String::new())
    }
}

impl TagInput {
    /// Normalized tags: trimmed, empties dropped.
    pub fn to_tags(&self) -> Vec<String> {
        match self {
            TagInput::Text(text) => parse_tags(text),
            TagInput::List(list) => list
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// The editor form before publishing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostDraft {
    pub title: String,
    #[serde(alias = "subtitle")]
    pub summary: String,
    pub content: String,
    pub tags: TagInput,
    #[serde(alias = "imageUrl")]
    pub cover_url: Option<String>,
}

impl PostDraft {
    /// Parse a draft from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the publish requirements.
    ///
    /// The trimmed title needs at least [`MIN_TITLE_CHARS`] characters and
    /// the trimmed content at least [`MIN_CONTENT_CHARS`].
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(Error::InvalidDraft(format!(
                "title must be at least {MIN_TITLE_CHARS} characters"
            )));
        }
        if self.content.trim().chars().count() < MIN_CONTENT_CHARS {
            return Err(Error::InvalidDraft(format!(
                "content must be at least {MIN_CONTENT_CHARS} characters"
            )));
        }
        Ok(())
    }

    /// Slug derived from the title, for use as a post id.
    pub fn slug(&self) -> String {
        let slug = slugify(&self.title);
        if slug.is_empty() {
            "post".to_string()
        } else {
            slug
        }
    }

    /// Validate and normalize the draft into a post.
    ///
    /// Text fields are trimmed, tags parsed, and an empty cover dropped.
    /// Timestamps and author are left for the caller to fill in.
    pub fn into_post(self, id: impl Into<String>) -> Result<Post> {
        self.validate()?;

        let tags = self.tags.to_tags();
        let cover_url = self
            .cover_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Ok(Post {
            id: id.into(),
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            content: self.content.trim().to_string(),
            tags,
            cover_url,
            author: None,
            created_at: None,
            updated_at: None,
        })
    }
}

/// A set of posts loaded from a JSON export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Parse posts from JSON.
    ///
    /// Accepts either a bare array of posts or the backend's
    /// `{"posts": [...]}` envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let posts = match value {
            serde_json::Value::Object(mut map) if map.contains_key("posts") => {
                let posts = map.remove("posts").unwrap_or_default();
                serde_json::from_value(posts)?
            }
            other => serde_json::from_value(other)?,
        };
        Ok(Self { posts })
    }

    /// Load posts from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let collection = Self::from_json(&read_text(path)?)?;
        tracing::debug!(
            path = %path.display(),
            posts = collection.len(),
            "loaded post collection"
        );
        Ok(collection)
    }

    /// Replace an empty collection with the welcome post.
    pub fn or_sample(self) -> Self {
        if self.posts.is_empty() {
            tracing::info!("no posts found, using the welcome post");
            Self::new(vec![Post::sample()])
        } else {
            self
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by id.
    pub fn find(&self, id: &str) -> Result<&Post> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::PostNotFound(id.to_string()))
    }

    /// All posts, newest first.
    pub fn recent(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        sort_recent(&mut posts);
        posts
    }

    /// Posts carrying `tag`, newest first.
    pub fn with_tag(&self, tag: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().filter(|p| p.has_tag(tag)).collect();
        sort_recent(&mut posts);
        posts
    }

    /// Posts matching a search query, newest first.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.matches_query(query))
            .collect();
        sort_recent(&mut posts);
        posts
    }

    /// Distinct tags across all posts, sorted.
    pub fn tags(&self) -> Vec<&str> {
        self.posts
            .iter()
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
