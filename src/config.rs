//! Linker configuration.
//!
//! [`Config`] carries the switches for each match kind and the options that
//! shape the generated anchors. Its hashtag service is typed, so a built
//! configuration can never point hashtags at an unknown service; string input
//! goes through [`ConfigBuilder`], which reports the bad value instead.

use std::{fmt, str::FromStr, sync::Arc};

use crate::{Error, HtmlTag, Linker, Match};

/// Service that hashtag links point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashtagService {
    Twitter,
    Facebook,
}

impl HashtagService {
    /// Name accepted by [`FromStr`] for this service.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HashtagService::Twitter => "twitter",
            HashtagService::Facebook => "facebook",
        }
    }
}

impl fmt::Display for HashtagService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for HashtagService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "twitter" => Ok(HashtagService::Twitter),
            "facebook" => Ok(HashtagService::Facebook),
            other => Err(Error::InvalidHashtagService(other.to_string())),
        }
    }
}

/// What a custom replacement callback wants done with a match.
#[derive(Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Emit this string instead of the match.
    Text(String),
    /// Leave the matched text untouched.
    Skip,
    /// Emit the rendered tag.
    Tag(HtmlTag),
    /// Emit the anchor the linker would have built anyway.
    Default,
}

/// Per-match replacement callback.
///
/// The callback receives the [`Linker`] running it, so it can reach
/// [`Linker::tag_builder`] and decorate the default anchor.
pub type ReplaceFn = Arc<dyn Fn(&Linker, &Match) -> Replacement + Send + Sync>;

/// Options controlling which matches are linked and how anchors look.
#[derive(Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each match kind and anchor option is an independent switch"
)]
pub struct Config {
    /// Link URLs such as `google.com` or `http://example.org/path`.
    pub urls: bool,
    /// Link email addresses.
    pub email: bool,
    /// Link `@handle` mentions to Twitter.
    pub twitter: bool,
    /// Link US-style phone numbers.
    pub phone: bool,
    /// Link `#hashtags` to the given service, or leave them alone.
    pub hashtag: Option<HashtagService>,
    /// Add `target="_blank"` to generated anchors.
    pub new_window: bool,
    /// Drop `http(s)://` and `www.` from the visible text of URL anchors.
    pub strip_prefix: bool,
    /// Maximum visible length of anchor text; `None` or `Some(0)` disables it.
    pub truncate: Option<usize>,
    /// CSS class added to every anchor, plus a `<class>-<kind>` variant.
    pub class_name: String,
    /// Optional per-match override of the generated replacement.
    pub replace_fn: Option<ReplaceFn>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: true,
            email: true,
            twitter: true,
            phone: true,
            hashtag: None,
            new_window: true,
            strip_prefix: true,
            truncate: None,
            class_name: String::new(),
            replace_fn: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("urls", &self.urls)
            .field("email", &self.email)
            .field("twitter", &self.twitter)
            .field("phone", &self.phone)
            .field("hashtag", &self.hashtag)
            .field("new_window", &self.new_window)
            .field("strip_prefix", &self.strip_prefix)
            .field("truncate", &self.truncate)
            .field("class_name", &self.class_name)
            .field("replace_fn", &self.replace_fn.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Config {
    /// Start a [`ConfigBuilder`] seeded with the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder { ConfigBuilder::default() }
}

/// Builder for [`Config`] accepting the hashtag service by name.
///
/// # Examples
///
/// ```
/// use autolinker::{Config, HashtagService};
///
/// let config = Config::builder().hashtag("facebook").new_window(false).build().unwrap();
/// assert_eq!(config.hashtag, Some(HashtagService::Facebook));
/// assert!(Config::builder().hashtag("myspace").build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
    hashtag: Option<String>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn urls(mut self, enabled: bool) -> Self {
        self.config.urls = enabled;
        self
    }

    #[must_use]
    pub fn email(mut self, enabled: bool) -> Self {
        self.config.email = enabled;
        self
    }

    #[must_use]
    pub fn twitter(mut self, enabled: bool) -> Self {
        self.config.twitter = enabled;
        self
    }

    #[must_use]
    pub fn phone(mut self, enabled: bool) -> Self {
        self.config.phone = enabled;
        self
    }

    /// Link hashtags to the named service (`twitter` or `facebook`).
    ///
    /// The name is checked by [`ConfigBuilder::build`].
    #[must_use]
    pub fn hashtag(mut self, service: impl Into<String>) -> Self {
        self.hashtag = Some(service.into());
        self
    }

    /// Leave hashtags unlinked.
    #[must_use]
    pub fn no_hashtag(mut self) -> Self {
        self.hashtag = None;
        self.config.hashtag = None;
        self
    }

    #[must_use]
    pub fn new_window(mut self, enabled: bool) -> Self {
        self.config.new_window = enabled;
        self
    }

    #[must_use]
    pub fn strip_prefix(mut self, enabled: bool) -> Self {
        self.config.strip_prefix = enabled;
        self
    }

    #[must_use]
    pub fn truncate(mut self, max_len: usize) -> Self {
        self.config.truncate = Some(max_len);
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.config.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn replace_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Linker, &Match) -> Replacement + Send + Sync + 'static,
    {
        self.config.replace_fn = Some(Arc::new(f));
        self
    }

    /// Finish the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHashtagService`] when the hashtag service name
    /// is not recognised.
    pub fn build(self) -> Result<Config, Error> {
        let mut config = self.config;
        if let Some(name) = self.hashtag {
            config.hashtag = Some(name.parse()?);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert!(config.urls && config.email && config.twitter && config.phone);
        assert_eq!(config.hashtag, None);
        assert!(config.new_window);
        assert!(config.strip_prefix);
        assert_eq!(config.truncate, None);
        assert!(config.class_name.is_empty());
        assert!(config.replace_fn.is_none());
    }

    #[rstest]
    #[case("twitter", HashtagService::Twitter)]
    #[case("facebook", HashtagService::Facebook)]
    fn parses_known_services(#[case] name: &str, #[case] expected: HashtagService) {
        assert_eq!(name.parse::<HashtagService>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[rstest]
    #[case("Twitter")]
    #[case("instagram")]
    #[case("")]
    #[case("false")]
    fn builder_rejects_unknown_services(#[case] name: &str) {
        let err = Config::builder().hashtag(name).build().unwrap_err();
        assert_eq!(err, Error::InvalidHashtagService(name.to_string()));
    }

    #[test]
    fn no_hashtag_clears_a_pending_service() {
        let config = Config::builder()
            .hashtag("myspace")
            .no_hashtag()
            .build()
            .unwrap();
        assert_eq!(config.hashtag, None);
    }

    #[test]
    fn builder_sets_every_option() {
        let config = Config::builder()
            .urls(false)
            .email(false)
            .twitter(false)
            .phone(false)
            .hashtag("twitter")
            .new_window(false)
            .strip_prefix(false)
            .truncate(10)
            .class_name("link")
            .replace_fn(|_, _| Replacement::Skip)
            .build()
            .unwrap();
        assert!(!config.urls && !config.email && !config.twitter && !config.phone);
        assert_eq!(config.hashtag, Some(HashtagService::Twitter));
        assert!(!config.new_window);
        assert!(!config.strip_prefix);
        assert_eq!(config.truncate, Some(10));
        assert_eq!(config.class_name, "link");
        assert!(config.replace_fn.is_some());
    }

    #[test]
    fn debug_hides_the_callback() {
        let config = Config::builder()
            .replace_fn(|_, _| Replacement::Default)
            .build()
            .unwrap();
        assert!(format!("{config:?}").contains("replace_fn: Some(\"<fn>\")"));
    }
}
