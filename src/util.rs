//! Input decoding and small text helpers.

use std::borrow::Cow;
use std::path::Path;

use crate::error::Result;

/// Decode bytes to a string.
///
/// This function:
/// 1. First tries UTF-8 (a leading BOM is stripped by `encoding_rs`)
/// 2. Falls back to Windows-1252, which covers drafts saved by older
///    desktop editors
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8
/// without a BOM.
///
/// # Examples
///
/// ```
/// use byteblog::util::decode_text;
///
/// assert_eq!(decode_text("Hello".as_bytes()), "Hello");
/// // 0xE9 is "é" in Windows-1252 and invalid as UTF-8
/// assert_eq!(decode_text(b"caf\xE9"), "café");
/// ```
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    tracing::debug!("input is not valid UTF-8, decoding as Windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Read a text file, decoding it with [`decode_text`].
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(decode_text(&bytes).into_owned())
}

/// Truncate an ISO date/timestamp to just the date portion (YYYY-MM-DD).
///
/// Post records carry full RFC 3339 timestamps like
/// "2024-05-26T16:26:51.000Z"; listings only show the day.
///
/// # Examples
///
/// ```
/// use byteblog::util::truncate_to_date;
///
/// assert_eq!(truncate_to_date("2024-05-26T16:26:51Z"), "2024-05-26");
/// assert_eq!(truncate_to_date("2024-05-26"), "2024-05-26");
/// ```
pub fn truncate_to_date(s: &str) -> &str {
    match s.find('T') {
        Some(t_pos) => &s[..t_pos],
        None => s,
    }
}
