//! Shorten anchor text with a trailing ellipsis marker.
//!
//! Lengths are counted in characters, never bytes, so multi-byte text is cut
//! on character boundaries.

use std::borrow::Cow;

/// Marker appended to truncated anchor text.
pub const ELLIPSIS: &str = "..";

/// Truncate `text` to at most `max_len` characters, ending with `marker`.
///
/// Text that already fits is returned unchanged. Otherwise the text is cut so
/// that the kept prefix plus `marker` is `max_len` characters long; a limit
/// shorter than the marker leaves only the marker.
///
/// # Examples
///
/// ```
/// use autolinker::ellipsis::{ELLIPSIS, ellipsis};
///
/// assert_eq!(ellipsis("yahoo.com/some/long/path", 12, ELLIPSIS), "yahoo.com/..");
/// assert_eq!(ellipsis("short", 12, ELLIPSIS), "short");
/// ```
#[must_use]
pub fn ellipsis<'a>(text: &'a str, max_len: usize, marker: &str) -> Cow<'a, str> {
    if text.chars().count() <= max_len {
        return Cow::Borrowed(text);
    }
    let keep = max_len.saturating_sub(marker.chars().count());
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(idx, _)| idx);
    Cow::Owned(format!("{}{marker}", &text[..cut]))
}
