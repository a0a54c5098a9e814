//! Error types for byteblog operations.
//!
//! Formatting itself never fails; these cover loading posts and drafts,
//! validating drafts, and reading configuration.

use thiserror::Error;

/// Errors that can occur while loading, validating, or rendering posts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid draft: {0}")]
    InvalidDraft(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
