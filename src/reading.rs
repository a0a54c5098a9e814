//! Reading-time estimates for post content.

use std::fmt;

/// Assumed reading speed.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated time to read a piece of text.
///
/// A coarse heuristic: whitespace-separated tokens divided by
/// [`WORDS_PER_MINUTE`], rounded to the nearest minute and never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    /// Whitespace-separated tokens in the text.
    pub words: usize,
    /// Whole minutes, at least 1.
    pub minutes: usize,
}

impl ReadingTime {
    /// Estimate the reading time of `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteblog::ReadingTime;
    ///
    /// let estimate = ReadingTime::from_text("three small words");
    /// assert_eq!(estimate.words, 3);
    /// assert_eq!(estimate.minutes, 1);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let words = text.split_whitespace().count();
        // Half a minute rounds up
        let minutes = ((words + WORDS_PER_MINUTE / 2) / WORDS_PER_MINUTE).max(1);
        Self { words, minutes }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}

/// Human-readable reading-time label, e.g. `"3 min read"`.
///
/// # Examples
///
/// ```
/// use byteblog::estimate_reading_time;
///
/// assert_eq!(estimate_reading_time(""), "1 min read");
/// assert_eq!(estimate_reading_time(&"word ".repeat(400)), "2 min read");
/// ```
pub fn estimate_reading_time(text: &str) -> String {
    ReadingTime::from_text(text).to_string()
}
