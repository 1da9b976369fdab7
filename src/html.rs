//! A flat HTML tokenizer.
//!
//! The tokenizer does not build a tree. It walks the input once, splitting it
//! into tags, comments, a small allow-list of character entities and the
//! plain text between them, so the linker can skip markup and only scan text.
//! Concatenating the text of every node reproduces the input exactly.
//!
//! Recognition is regex based and deliberately permissive: anything that does
//! not look like a tag or comment falls through to text.

use std::sync::LazyLock;

use regex::Regex;

const TAG_NAME: &str = r"[0-9a-zA-Z][0-9a-zA-Z:]*";
const ATTR_NAME: &str = r#"[^\s\x00"'>/=\x01-\x1F\x7F]+"#;
const ATTR_VALUE: &str = r#"(?:"[^"]*?"|'[^']*?'|[^'"=<>`\s]+)"#;

/// Matches `<!DOCTYPE ...>`, start tags, end tags, self-closing tags and
/// `<!-- ... -->` comments.
///
/// Groups: `doctype` holds `!DOCTYPE`, `closing` the `/` of an end tag,
/// `comment` the text between `<!--` and `-->`, `name` any other tag name.
static TAG_RE: LazyLock<Regex> = lazy_regex!(
    &{
        let name_equals_value = format!(r"{ATTR_NAME}(?:\s*=\s*{ATTR_VALUE})?");
        format!(
            concat!(
                r"(?i)(?:<(?P<doctype>!DOCTYPE)(?:\s+(?:{nev}|{value}))*>)",
                r"|(?:<(?P<closing>/)?(?:!--(?P<comment>[\s\S]+?)--",
                r"|(?:(?P<name>{tag})(?:\s+{nev})*\s*/?))>)",
            ),
            nev = name_equals_value,
            value = ATTR_VALUE,
            tag = TAG_NAME,
        )
    },
    "html tag pattern should compile",
);

/// Character entities emitted as [`HtmlNode::Entity`].
///
/// `&amp;` is left in text on purpose: it routinely appears inside URL query
/// strings, which the scanner has to see whole.
static ENTITY_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)&(?:nbsp|lt|gt|quot|#160|#60|#62|#34|#39|#xa0|#x3c|#x3e|#x22|#x27);",
    "html entity pattern should compile",
);

/// Discriminant of an [`HtmlNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Element,
    Comment,
    Entity,
    Text,
}

/// A node produced by [`HtmlTokenizer::parse`], borrowing from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode<'a> {
    /// A tag such as `<a href="x">`, `</p>` or `<br/>`.
    Element {
        text: &'a str,
        /// Lower-cased tag name; `!doctype` for a doctype declaration.
        tag_name: String,
        closing: bool,
    },
    /// An HTML comment; `comment` is the trimmed text between the delimiters.
    Comment { text: &'a str, comment: &'a str },
    /// One of the recognised character entities, such as `&nbsp;`.
    Entity(&'a str),
    /// Plain text between tags and entities.
    Text(&'a str),
}

impl<'a> HtmlNode<'a> {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            HtmlNode::Element { .. } => NodeKind::Element,
            HtmlNode::Comment { .. } => NodeKind::Comment,
            HtmlNode::Entity(_) => NodeKind::Entity,
            HtmlNode::Text(_) => NodeKind::Text,
        }
    }

    /// The exact source text this node was produced from.
    #[must_use]
    pub fn text(&self) -> &'a str {
        match self {
            HtmlNode::Element { text, .. } | HtmlNode::Comment { text, .. } => *text,
            HtmlNode::Entity(text) | HtmlNode::Text(text) => *text,
        }
    }

    /// Tag name of an element node.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            HtmlNode::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_closing(&self) -> bool { matches!(self, HtmlNode::Element { closing: true, .. }) }
}

/// Splits HTML-bearing text into [`HtmlNode`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTokenizer;

impl HtmlTokenizer {
    #[must_use]
    pub fn new() -> Self { Self }

    /// Tokenize `html` in a single pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use autolinker::{HtmlNode, HtmlTokenizer};
    ///
    /// let nodes = HtmlTokenizer::new().parse("<b>hi</b>&nbsp;");
    /// assert_eq!(nodes.len(), 4);
    /// assert_eq!(nodes[1], HtmlNode::Text("hi"));
    /// assert_eq!(nodes[3], HtmlNode::Entity("&nbsp;"));
    /// ```
    #[must_use]
    pub fn parse<'a>(&self, html: &'a str) -> Vec<HtmlNode<'a>> {
        let mut nodes = Vec::new();
        let mut last = 0;

        for caps in TAG_RE.captures_iter(html) {
            let Some(tag) = caps.get(0) else { continue };
            push_text_and_entities(&html[last..tag.start()], &mut nodes);

            if let Some(comment) = caps.name("comment") {
                nodes.push(HtmlNode::Comment {
                    text: tag.as_str(),
                    comment: trim_comment(comment.as_str()),
                });
            } else {
                let name = caps
                    .name("doctype")
                    .or_else(|| caps.name("name"))
                    .map_or("", |m| m.as_str());
                nodes.push(HtmlNode::Element {
                    text: tag.as_str(),
                    tag_name: name.to_lowercase(),
                    closing: caps.name("closing").is_some(),
                });
            }
            last = tag.end();
        }

        push_text_and_entities(&html[last..], &mut nodes);
        log::trace!(target: "autolinker::html", "tokenized {} bytes into {} nodes", html.len(), nodes.len());
        nodes
    }
}

/// Split tag-free `text` at recognised entities, keeping both sides.
fn push_text_and_entities<'a>(text: &'a str, nodes: &mut Vec<HtmlNode<'a>>) {
    let mut last = 0;
    for entity in ENTITY_RE.find_iter(text) {
        if entity.start() > last {
            nodes.push(HtmlNode::Text(&text[last..entity.start()]));
        }
        nodes.push(HtmlNode::Entity(entity.as_str()));
        last = entity.end();
    }
    if last < text.len() {
        nodes.push(HtmlNode::Text(&text[last..]));
    }
}

fn trim_comment(comment: &str) -> &str {
    comment.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
