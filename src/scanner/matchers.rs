//! One matcher per match kind.
//!
//! A matcher finds the leftmost candidate of its kind at or after a byte
//! offset. Candidates are raw spans: they have not been checked against the
//! configuration or the [`MatchValidator`](crate::MatchValidator) yet.

use regex::Regex;

use super::patterns::{
    EMAIL_RE, HANDLE_RE, HASHTAG_RE, NESTED_SCHEME_RE, PHONE_RE, PROTOCOL_URL_RE, TLD_URL_RE,
    WWW_URL_RE,
};

/// A span of text one of the matchers recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate<'t> {
    /// Start of the span, including any leading context character.
    pub(crate) start: usize,
    pub(crate) end: usize,
    /// Start of the linkable text; `text[start..body_start]` is context that
    /// stays outside the anchor.
    pub(crate) body_start: usize,
    pub(crate) kind: CandidateKind<'t>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CandidateKind<'t> {
    Twitter {
        handle: &'t str,
    },
    Email,
    Url {
        /// Scheme and host of a scheme-prefixed URL.
        protocol_url: Option<&'t str>,
        /// `//` of a protocol-relative URL with the character before it.
        protocol_relative: Option<&'t str>,
    },
    Phone,
    Hashtag {
        tag: &'t str,
    },
}

pub(crate) type Matcher = fn(&str, usize) -> Option<Candidate<'_>>;

/// Matchers in priority order: when two candidates start at the same offset
/// the earlier matcher wins. A scheme-prefixed URL beats a `www.` URL, which
/// beats a bare-TLD URL.
pub(crate) const MATCHERS: [Matcher; 7] = [
    find_handle,
    find_email,
    find_protocol_url,
    find_www_url,
    find_tld_url,
    find_phone,
    find_hashtag,
];

pub(crate) fn find_handle(text: &str, from: usize) -> Option<Candidate<'_>> {
    let (start, body_start, end, handle) = find_after_boundary(&HANDLE_RE, text, from)?;
    Some(Candidate {
        start,
        end,
        body_start,
        kind: CandidateKind::Twitter { handle },
    })
}

pub(crate) fn find_hashtag(text: &str, from: usize) -> Option<Candidate<'_>> {
    let (start, body_start, end, tag) = find_after_boundary(&HASHTAG_RE, text, from)?;
    Some(Candidate {
        start,
        end,
        body_start,
        kind: CandidateKind::Hashtag { tag },
    })
}

pub(crate) fn find_email(text: &str, from: usize) -> Option<Candidate<'_>> {
    let m = EMAIL_RE.find_at(text, from)?;
    Some(Candidate {
        start: m.start(),
        end: m.end(),
        body_start: m.start(),
        kind: CandidateKind::Email,
    })
}

pub(crate) fn find_phone(text: &str, from: usize) -> Option<Candidate<'_>> {
    let m = PHONE_RE.find_at(text, from)?;
    Some(Candidate {
        start: m.start(),
        end: m.end(),
        body_start: m.start(),
        kind: CandidateKind::Phone,
    })
}

pub(crate) fn find_protocol_url(text: &str, from: usize) -> Option<Candidate<'_>> {
    let mut at = from;
    loop {
        let caps = PROTOCOL_URL_RE.captures_at(text, at)?;
        let (whole, scheme, protocol_url) =
            (caps.get(0)?, caps.name("scheme")?, caps.name("protocol_url")?);
        if is_standalone_scheme(&text[scheme.end()..]) {
            return Some(Candidate {
                start: whole.start(),
                end: whole.end(),
                body_start: whole.start(),
                kind: CandidateKind::Url {
                    protocol_url: Some(protocol_url.as_str()),
                    protocol_relative: None,
                },
            });
        }
        at = next_char_boundary(text, whole.start());
    }
}

/// A scheme is real unless a port number (`host:8080`) or another scheme
/// (`link:http://...`) follows its colon.
fn is_standalone_scheme(after_colon: &str) -> bool {
    !after_colon.starts_with(|c: char| c.is_ascii_digit()) && !NESTED_SCHEME_RE.is_match(after_colon)
}

pub(crate) fn find_www_url(text: &str, from: usize) -> Option<Candidate<'_>> {
    find_relative_url(&WWW_URL_RE, text, from)
}

pub(crate) fn find_tld_url(text: &str, from: usize) -> Option<Candidate<'_>> {
    find_relative_url(&TLD_URL_RE, text, from)
}

fn find_relative_url<'t>(re: &Regex, text: &'t str, from: usize) -> Option<Candidate<'t>> {
    let caps = re.captures_at(text, from)?;
    let whole = caps.get(0)?;
    let relative = caps.name("relative").map(|m| m.as_str());
    // Anything before the `//` is context, not part of the link.
    let context_len = relative.map_or(0, |rel| rel.len() - "//".len());
    Some(Candidate {
        start: whole.start(),
        end: whole.end(),
        body_start: whole.start() + context_len,
        kind: CandidateKind::Url {
            protocol_url: None,
            protocol_relative: relative,
        },
    })
}

/// Find `re` where its sigil sits at the start of the text or right after a
/// non-word character.
///
/// Returns the context start, sigil offset, end and first capture group.
fn find_after_boundary<'t>(
    re: &Regex,
    text: &'t str,
    from: usize,
) -> Option<(usize, usize, usize, &'t str)> {
    let mut at = from;
    loop {
        let caps = re.captures_at(text, at)?;
        let (whole, name) = (caps.get(0)?, caps.get(1)?);
        if let Some(start) = boundary_start(text, whole.start(), from) {
            return Some((start, whole.start(), whole.end(), name.as_str()));
        }
        at = next_char_boundary(text, whole.start());
    }
}

/// Offset of the context character before `sigil`, or `sigil` itself at the
/// start of the text.
///
/// The context character must not be a word character and must not belong to
/// text already consumed before `from`.
fn boundary_start(text: &str, sigil: usize, from: usize) -> Option<usize> {
    if sigil == 0 {
        return Some(0);
    }
    let (idx, ch) = text[..sigil].char_indices().next_back()?;
    (idx >= from && !is_word_char(ch)).then_some(idx)
}

fn is_word_char(ch: char) -> bool { ch.is_ascii_alphanumeric() || ch == '_' }

fn next_char_boundary(text: &str, idx: usize) -> usize {
    idx + text[idx..].chars().next().map_or(1, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn span<'t>(text: &'t str, candidate: &Candidate<'_>) -> &'t str {
        &text[candidate.start..candidate.end]
    }

    /// Leftmost URL of any form, first form winning ties.
    fn first_url(text: &str) -> Option<Candidate<'_>> {
        [find_protocol_url, find_www_url, find_tld_url]
            .into_iter()
            .filter_map(|find| find(text, 0))
            .min_by_key(|candidate| candidate.start)
    }

    #[rstest]
    #[case::start_of_text("@joe hi", "@joe", 0)]
    #[case::after_space("hi @joe", " @joe", 3)]
    #[case::after_punctuation("(@joe)", "(@joe", 1)]
    #[case::after_multibyte("é@joe", "é@joe", 2)]
    #[case::second_sigil("@@joe", "@@joe", 1)]
    fn handle_takes_context_character(
        #[case] text: &str,
        #[case] expected: &str,
        #[case] body_start: usize,
    ) {
        let candidate = find_handle(text, 0).unwrap();
        assert_eq!(span(text, &candidate), expected);
        assert_eq!(candidate.body_start, body_start);
        assert_eq!(candidate.kind, CandidateKind::Twitter { handle: "joe" });
    }

    #[rstest]
    #[case("me@joe.com")]
    #[case("a_@joe")]
    #[case("9#tag")]
    fn sigil_after_word_character_is_ignored(#[case] text: &str) {
        assert_eq!(find_handle(text, 0), None);
        assert_eq!(find_hashtag(text, 0), None);
    }

    #[test]
    fn context_before_search_start_does_not_count() {
        assert_eq!(find_handle(" @joe", 1), None);
        assert!(find_handle(" @joe", 0).is_some());
    }

    #[test]
    fn handle_is_capped_at_fifteen_characters() {
        let candidate = find_handle("@abcdefghijklmnopq", 0).unwrap();
        assert_eq!(
            candidate.kind,
            CandidateKind::Twitter {
                handle: "abcdefghijklmno"
            }
        );
    }

    #[test]
    fn later_valid_handle_is_found_after_rejected_one() {
        let text = "x@a @b";
        let candidate = find_handle(text, 0).unwrap();
        assert_eq!(span(text, &candidate), " @b");
    }

    #[rstest]
    #[case::plain("see google.com.", "google.com", None, None)]
    #[case::www("www.google.com/x", "www.google.com/x", None, None)]
    #[case::scheme("go http://localhost:8080/a", "http://localhost:8080/a", Some("http://localhost"), None)]
    #[case::mailto_style("mailto:x.com", "mailto:x.com", Some("mailto:x.com"), None)]
    #[case::relative("//cdn.net/a", "//cdn.net/a", None, Some("//"))]
    #[case::relative_after_space("a //cdn.net", " //cdn.net", None, Some(" //"))]
    #[case::relative_www("x //www.abc", " //www.abc", None, Some(" //"))]
    #[case::port_is_not_a_scheme("google.com:8000/x", "google.com:8000/x", None, None)]
    fn url_forms(
        #[case] text: &str,
        #[case] expected: &str,
        #[case] protocol_url: Option<&str>,
        #[case] protocol_relative: Option<&str>,
    ) {
        let candidate = first_url(text).unwrap();
        assert_eq!(span(text, &candidate), expected);
        assert_eq!(
            candidate.kind,
            CandidateKind::Url {
                protocol_url,
                protocol_relative
            }
        );
    }

    #[test]
    fn relative_context_is_outside_the_body() {
        let text = "a //cdn.net";
        let candidate = first_url(text).unwrap();
        assert_eq!(&text[candidate.body_start..candidate.end], "//cdn.net");
    }

    #[test]
    fn nested_scheme_yields_to_inner_url() {
        let text = "link:http://www.google.com";
        let candidate = first_url(text).unwrap();
        assert_eq!(span(text, &candidate), "://www.google.com");
        assert_eq!(&text[candidate.body_start..candidate.end], "//www.google.com");
    }

    #[test]
    fn url_forms_search_independently() {
        let text = "a.com b.com www.c.com";
        assert_eq!(find_protocol_url(text, 0), None);
        assert_eq!(span(text, &find_www_url(text, 0).unwrap()), "www.c.com");
        assert_eq!(span(text, &find_tld_url(text, 2).unwrap()), "b.com");
    }

    #[test]
    fn email_includes_local_part_punctuation() {
        let text = "write to a.b+c@mail.example.org today";
        let candidate = find_email(text, 0).unwrap();
        assert_eq!(span(text, &candidate), "a.b+c@mail.example.org");
    }

    #[test]
    fn email_needs_known_tld() {
        assert_eq!(find_email("user@localhost", 0), None);
    }

    #[test]
    fn phone_search_respects_offset() {
        let text = "555-555-5555 and 444-444-4444";
        let candidate = find_phone(text, 1).unwrap();
        assert_eq!(span(text, &candidate), "444-444-4444");
    }
}
