//! HTML tag construction for generated links.
//!
//! [`HtmlTag`] is a small mutable description of an element that renders to
//! a string. [`AnchorTagBuilder`] turns a [`Match`] into the `<a>` tag the
//! linker emits by default.

use std::fmt;

use crate::{
    Config, Match,
    ellipsis::{ELLIPSIS, ellipsis},
};

/// An HTML element with attributes and inner HTML.
///
/// Attributes render in insertion order. Neither attribute values nor inner
/// HTML are escaped.
///
/// # Examples
///
/// ```
/// use autolinker::HtmlTag;
///
/// let mut tag = HtmlTag::new("a");
/// tag.set_attr("href", "http://google.com").add_class("link external");
/// tag.set_inner_html("google.com");
/// assert_eq!(
///     tag.to_string(),
///     r#"<a href="http://google.com" class="link external">google.com</a>"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlTag {
    tag_name: String,
    attrs: Vec<(String, String)>,
    inner_html: String,
}

impl HtmlTag {
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Self::default()
        }
    }

    pub fn set_tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = tag_name.into();
        self
    }

    #[must_use]
    pub fn tag_name(&self) -> &str { &self.tag_name }

    /// Set an attribute, replacing any earlier value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let (name, value) = (name.into(), value.into());
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Set several attributes at once; see [`HtmlTag::set_attr`].
    pub fn set_attrs<I, K, V>(&mut self, attrs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.set_attr(name, value);
        }
        self
    }

    /// Attributes as `(name, value)` pairs in render order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] { &self.attrs }

    pub fn set_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.set_attr("class", class)
    }

    /// Add whitespace-separated classes that are not present yet.
    pub fn add_class(&mut self, classes: &str) -> &mut Self {
        let mut current: Vec<String> = self.class().split_whitespace().map(str::to_owned).collect();
        for class in classes.split_whitespace() {
            if !current.iter().any(|c| c == class) {
                current.push(class.to_owned());
            }
        }
        self.set_class(current.join(" "))
    }

    /// Remove whitespace-separated classes, leaving the others in order.
    pub fn remove_class(&mut self, classes: &str) -> &mut Self {
        let remove: Vec<&str> = classes.split_whitespace().collect();
        let kept: Vec<&str> = self
            .class()
            .split_whitespace()
            .filter(|class| !remove.contains(class))
            .collect();
        let kept = kept.join(" ");
        self.set_class(kept)
    }

    /// The `class` attribute, or an empty string.
    #[must_use]
    pub fn class(&self) -> &str { self.attr("class").unwrap_or_default() }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.class().split_whitespace().any(|c| c == class)
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) -> &mut Self {
        self.inner_html = html.into();
        self
    }

    #[must_use]
    pub fn inner_html(&self) -> &str { &self.inner_html }

    /// Render the tag, e.g. `<a href="x">text</a>`.
    #[must_use]
    pub fn to_anchor_string(&self) -> String { self.to_string() }
}

impl fmt::Display for HtmlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag_name)?;
        for (name, value) in &self.attrs {
            write!(f, " {name}=\"{value}\"")?;
        }
        write!(f, ">{}</{}>", self.inner_html, self.tag_name)
    }
}

/// Builds the default anchor for a [`Match`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorTagBuilder {
    new_window: bool,
    truncate: Option<usize>,
    class_name: String,
}

impl AnchorTagBuilder {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            new_window: config.new_window,
            truncate: config.truncate.filter(|&max_len| max_len > 0),
            class_name: config.class_name.clone(),
        }
    }

    /// Build `<a href=... class=... target=...>text</a>` for `m`.
    ///
    /// `class` is only set with a configured class name, as
    /// `"<name> <name>-<kind>"`; `target="_blank"` only when opening links in
    /// a new window.
    #[must_use]
    pub fn build(&self, m: &Match) -> HtmlTag {
        let mut tag = HtmlTag::new("a");
        tag.set_attr("href", m.anchor_href());
        if !self.class_name.is_empty() {
            tag.set_class(format!("{0} {0}-{1}", self.class_name, m.kind()));
        }
        if self.new_window {
            tag.set_attr("target", "_blank");
        }
        let text = m.anchor_text();
        let text = match self.truncate {
            Some(max_len) => ellipsis(&text, max_len, ELLIPSIS).into_owned(),
            None => text,
        };
        tag.set_inner_html(text);
        tag
    }
}
