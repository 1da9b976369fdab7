//! Typed matches found by the scanner.
//!
//! Each variant knows the href and the visible text of the anchor it turns
//! into. `matched_text` is always the exact source text the match replaces;
//! characters the scanner needed for context but did not consume (a space
//! before `@handle`, an unbalanced trailing `)`) are kept out of it.

use std::{fmt, sync::LazyLock};

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::HashtagService;

static URL_PREFIX_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^(?:https?://)?(?:www\.)?",
    "url prefix pattern should compile",
);

/// The kind of a [`Match`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Url,
    Email,
    Phone,
    Twitter,
    Hashtag,
}

impl MatchKind {
    /// Lower-case name used in CSS class suffixes, e.g. `url`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Url => "url",
            MatchKind::Email => "email",
            MatchKind::Phone => "phone",
            MatchKind::Twitter => "twitter",
            MatchKind::Hashtag => "hashtag",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A linkable span of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Match {
    Url(UrlMatch),
    Email(EmailMatch),
    Phone(PhoneMatch),
    Twitter(TwitterMatch),
    Hashtag(HashtagMatch),
}

impl Match {
    #[must_use]
    pub fn kind(&self) -> MatchKind {
        match self {
            Match::Url(_) => MatchKind::Url,
            Match::Email(_) => MatchKind::Email,
            Match::Phone(_) => MatchKind::Phone,
            Match::Twitter(_) => MatchKind::Twitter,
            Match::Hashtag(_) => MatchKind::Hashtag,
        }
    }

    /// The source text this match replaces.
    #[must_use]
    pub fn matched_text(&self) -> &str {
        match self {
            Match::Url(m) => &m.matched_text,
            Match::Email(m) => &m.matched_text,
            Match::Phone(m) => &m.matched_text,
            Match::Twitter(m) => &m.matched_text,
            Match::Hashtag(m) => &m.matched_text,
        }
    }

    /// Target of the generated anchor.
    #[must_use]
    pub fn anchor_href(&self) -> String {
        match self {
            Match::Url(m) => m.anchor_href(),
            Match::Email(m) => format!("mailto:{}", m.email),
            Match::Phone(m) => format!("tel:{}", m.number),
            Match::Twitter(m) => format!("https://twitter.com/{}", m.handle),
            Match::Hashtag(m) => m.anchor_href(),
        }
    }

    /// Visible text of the generated anchor, before any truncation.
    #[must_use]
    pub fn anchor_text(&self) -> String {
        match self {
            Match::Url(m) => m.anchor_text(),
            Match::Email(m) => m.email.clone(),
            Match::Phone(m) => m.matched_text.clone(),
            Match::Twitter(m) => format!("@{}", m.handle),
            Match::Hashtag(m) => format!("#{}", m.hashtag),
        }
    }
}

/// A URL such as `google.com`, `www.yahoo.com`, `//cdn.net/x` or
/// `https://example.org/path?q=1`.
#[derive(Debug, Clone)]
pub struct UrlMatch {
    matched_text: String,
    protocol_url: bool,
    protocol_relative: bool,
    strip_prefix: bool,
    /// The URL with its scheme, resolved once on first use.
    url: OnceCell<String>,
}

impl UrlMatch {
    /// `protocol_url` marks text that starts with a scheme (`http://`,
    /// `mailto:`); `protocol_relative` marks text that starts with `//`.
    #[must_use]
    pub fn new(
        matched_text: impl Into<String>,
        protocol_url: bool,
        protocol_relative: bool,
        strip_prefix: bool,
    ) -> Self {
        Self {
            matched_text: matched_text.into(),
            protocol_url,
            protocol_relative,
            strip_prefix,
            url: OnceCell::new(),
        }
    }

    /// The URL, with `http://` assumed when the text carried no scheme.
    ///
    /// Protocol-relative URLs keep their leading `//`.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.get_or_init(|| {
            if self.protocol_url || self.protocol_relative {
                self.matched_text.clone()
            } else {
                format!("http://{}", self.matched_text)
            }
        })
    }

    #[must_use]
    pub fn is_protocol_url(&self) -> bool { self.protocol_url }

    #[must_use]
    pub fn is_protocol_relative(&self) -> bool { self.protocol_relative }

    /// The URL with `&amp;` turned back into `&`.
    #[must_use]
    pub fn anchor_href(&self) -> String { self.url().replace("&amp;", "&") }

    #[must_use]
    pub fn anchor_text(&self) -> String {
        let mut text = self.url();
        if self.protocol_relative {
            text = text.strip_prefix("//").unwrap_or(text);
        }
        if self.strip_prefix {
            let prefix_len = URL_PREFIX_RE.find(text).map_or(0, |m| m.end());
            text = &text[prefix_len..];
        }
        text.strip_suffix('/').unwrap_or(text).to_string()
    }
}

impl PartialEq for UrlMatch {
    fn eq(&self, other: &Self) -> bool {
        self.matched_text == other.matched_text
            && self.protocol_url == other.protocol_url
            && self.protocol_relative == other.protocol_relative
            && self.strip_prefix == other.strip_prefix
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMatch {
    matched_text: String,
    email: String,
}

impl EmailMatch {
    #[must_use]
    pub fn new(matched_text: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            matched_text: matched_text.into(),
            email: email.into(),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str { &self.email }
}

/// A phone number; the anchor text keeps the original punctuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneMatch {
    matched_text: String,
    number: String,
}

impl PhoneMatch {
    /// Build a match from the source text, keeping only its ASCII digits as
    /// the dialable number.
    #[must_use]
    pub fn new(matched_text: impl Into<String>) -> Self {
        let matched_text = matched_text.into();
        let number = matched_text.chars().filter(char::is_ascii_digit).collect();
        Self {
            matched_text,
            number,
        }
    }

    /// Digits only, e.g. `5555555555` for `(555) 555-5555`.
    #[must_use]
    pub fn number(&self) -> &str { &self.number }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterMatch {
    matched_text: String,
    handle: String,
}

impl TwitterMatch {
    #[must_use]
    pub fn new(matched_text: impl Into<String>, handle: impl Into<String>) -> Self {
        Self {
            matched_text: matched_text.into(),
            handle: handle.into(),
        }
    }

    /// The handle without its `@`.
    #[must_use]
    pub fn handle(&self) -> &str { &self.handle }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashtagMatch {
    matched_text: String,
    hashtag: String,
    service: HashtagService,
}

impl HashtagMatch {
    #[must_use]
    pub fn new(
        matched_text: impl Into<String>,
        hashtag: impl Into<String>,
        service: HashtagService,
    ) -> Self {
        Self {
            matched_text: matched_text.into(),
            hashtag: hashtag.into(),
            service,
        }
    }

    /// The tag without its `#`.
    #[must_use]
    pub fn hashtag(&self) -> &str { &self.hashtag }

    #[must_use]
    pub fn service(&self) -> HashtagService { self.service }

    #[must_use]
    pub fn anchor_href(&self) -> String {
        match self.service {
            HashtagService::Twitter => format!("https://twitter.com/hashtag/{}", self.hashtag),
            HashtagService::Facebook => {
                format!("https://www.facebook.com/hashtag/{}", self.hashtag)
            }
        }
    }
}
