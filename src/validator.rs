//! Post-match checks for URL candidates.
//!
//! The URL patterns are intentionally loose, so some candidates they produce
//! are not links at all (`git:d`, `abc//host.com`) or are dangerous
//! (`javascript:`). [`MatchValidator`] rejects those; the scanner then leaves
//! the candidate's text untouched.

use std::sync::LazyLock;

use regex::Regex;

static FULL_PROTOCOL_RE: LazyLock<Regex> = lazy_regex!(
    r"^[A-Za-z][-.+A-Za-z0-9]+://",
    "full protocol pattern should compile",
);

static URI_SCHEME_RE: LazyLock<Regex> = lazy_regex!(
    r"^[A-Za-z][-.+A-Za-z0-9]+:",
    "uri scheme pattern should compile",
);

static LETTER_AFTER_PROTOCOL_RE: LazyLock<Regex> = lazy_regex!(
    r":[^\s]*?[A-Za-z]",
    "letter after protocol pattern should compile",
);

static WORD_CHAR_BEFORE_SLASHES_RE: LazyLock<Regex> = lazy_regex!(
    r"^[A-Za-z0-9_]//",
    "protocol-relative prefix pattern should compile",
);

const BLOCKED_SCHEMES: [&str; 2] = ["javascript:", "vbscript:"];

/// Rejects URL candidates the scanner's patterns can only approximate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchValidator;

impl MatchValidator {
    #[must_use]
    pub fn new() -> Self { Self }

    /// Decide whether a URL candidate should be linked.
    ///
    /// `url` is the whole candidate, `protocol_url` the scheme-prefixed part
    /// when the candidate starts with a scheme, and `protocol_relative` the
    /// `//` of a protocol-relative candidate together with the character
    /// before it, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use autolinker::MatchValidator;
    ///
    /// let validator = MatchValidator::new();
    /// assert!(validator.is_valid("http://localhost", Some("http://localhost"), None));
    /// assert!(!validator.is_valid("git:d", Some("git:d"), None));
    /// assert!(!validator.is_valid("a//google.com", None, Some("a//")));
    /// ```
    #[must_use]
    pub fn is_valid(
        &self,
        url: &str,
        protocol_url: Option<&str>,
        protocol_relative: Option<&str>,
    ) -> bool {
        !(protocol_url.is_some_and(has_blocked_scheme)
            || lacks_protocol_and_dot(url, protocol_url)
            || lacks_letter_after_protocol(url, protocol_url)
            || protocol_relative.is_some_and(is_glued_to_word))
    }
}

fn has_blocked_scheme(protocol_url: &str) -> bool {
    URI_SCHEME_RE.find(protocol_url).is_some_and(|scheme| {
        let scheme = scheme.as_str().to_ascii_lowercase();
        BLOCKED_SCHEMES.contains(&scheme.as_str())
    })
}

/// A URL needs either a full `scheme://` or at least one dot (rules out `git:d`).
fn lacks_protocol_and_dot(url: &str, protocol_url: Option<&str>) -> bool {
    let has_full_protocol = protocol_url.is_some_and(|p| FULL_PROTOCOL_RE.is_match(p));
    !has_full_protocol && !url.contains('.')
}

/// A scheme-prefixed URL needs a letter after the `:` (rules out `git:1.0`).
fn lacks_letter_after_protocol(url: &str, protocol_url: Option<&str>) -> bool {
    protocol_url.is_some() && !LETTER_AFTER_PROTOCOL_RE.is_match(url)
}

/// `//` straight after a word character is a path, not a URL (`abc//host.com`).
fn is_glued_to_word(protocol_relative: &str) -> bool {
    WORD_CHAR_BEFORE_SLASHES_RE.is_match(protocol_relative)
}
