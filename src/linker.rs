//! The linking entry point.
//!
//! [`Linker`] tokenizes its input, skips everything inside existing `<a>`
//! elements and hands the remaining text nodes to the [`MatchScanner`].

use crate::{AnchorTagBuilder, Config, HtmlNode, HtmlTokenizer, Match, MatchScanner, Replacement};

/// Turns URLs, emails, phone numbers, handles and hashtags into links.
///
/// A `Linker` holds no per-call state, so one instance can link any number of
/// strings, from any number of threads.
///
/// # Examples
///
/// ```
/// use autolinker::{Config, Linker};
///
/// let linker = Linker::new(Config {
///     new_window: false,
///     ..Config::default()
/// });
/// assert_eq!(
///     linker.link("visit google.com"),
///     r#"visit <a href="http://google.com">google.com</a>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Linker {
    config: Config,
    tokenizer: HtmlTokenizer,
    scanner: MatchScanner,
    tag_builder: AnchorTagBuilder,
}

impl Default for Linker {
    fn default() -> Self { Self::new(Config::default()) }
}

impl Linker {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            tokenizer: HtmlTokenizer::new(),
            scanner: MatchScanner::new(&config),
            tag_builder: AnchorTagBuilder::new(&config),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config { &self.config }

    /// The builder used for default anchors, for use from a replace callback.
    #[must_use]
    pub fn tag_builder(&self) -> &AnchorTagBuilder { &self.tag_builder }

    /// Link every match in `text`, leaving markup and existing anchors alone.
    #[must_use]
    pub fn link(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut anchor_depth = 0_usize;
        let mut links = 0_usize;

        for node in self.tokenizer.parse(text) {
            match &node {
                HtmlNode::Element { tag_name, closing, .. } if tag_name == "a" => {
                    anchor_depth = if *closing {
                        anchor_depth.saturating_sub(1)
                    } else {
                        anchor_depth + 1
                    };
                    out.push_str(node.text());
                }
                HtmlNode::Text(fragment) if anchor_depth == 0 => {
                    out.push_str(&self.scanner.replace(fragment, |m| {
                        let replacement = self.replacement_for(m);
                        links += usize::from(replacement.is_some());
                        replacement
                    }));
                }
                _ => out.push_str(node.text()),
            }
        }

        log::debug!("linked {links} matches in {} bytes of input", text.len());
        out
    }

    fn replacement_for(&self, m: &Match) -> Option<String> {
        let replacement = self
            .config
            .replace_fn
            .as_ref()
            .map_or(Replacement::Default, |replace_fn| replace_fn(self, m));
        match replacement {
            Replacement::Text(text) => Some(text),
            Replacement::Skip => None,
            Replacement::Tag(tag) => Some(tag.to_anchor_string()),
            Replacement::Default => Some(self.tag_builder.build(m).to_anchor_string()),
        }
    }
}

/// Link `text` with a one-off [`Linker`].
///
/// # Examples
///
/// ```
/// use autolinker::{Config, link};
///
/// let html = link("mail me@foo.com", &Config::default());
/// assert_eq!(html, r#"mail <a href="mailto:me@foo.com" target="_blank">me@foo.com</a>"#);
/// ```
#[must_use]
pub fn link(text: &str, config: &Config) -> String { Linker::new(config.clone()).link(text) }
