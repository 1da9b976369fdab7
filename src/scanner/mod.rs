//! Find linkable text in a plain-text fragment.
//!
//! The scanner runs an ordered list of matchers, one per match kind, over the
//! text, always taking the leftmost candidate and preferring the earlier
//! matcher on ties. Each candidate consumes its span even when it turns out to
//! be disabled or invalid; such spans are copied through unchanged.

mod matchers;
mod patterns;

use matchers::{Candidate, CandidateKind, MATCHERS, Matcher};

use crate::{
    Config, HashtagService, MatchValidator,
    matches::{EmailMatch, HashtagMatch, Match, PhoneMatch, TwitterMatch, UrlMatch},
};

/// Rewrites matches inside plain text.
#[derive(Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "mirrors the per-kind switches of Config"
)]
pub struct MatchScanner {
    urls: bool,
    email: bool,
    twitter: bool,
    phone: bool,
    hashtag: Option<HashtagService>,
    strip_prefix: bool,
    validator: MatchValidator,
}

impl Default for MatchScanner {
    fn default() -> Self { Self::new(&Config::default()) }
}

/// A candidate that survived configuration and validation checks.
struct Resolved<'t> {
    /// Context text before the match, e.g. the space before `@handle`.
    prefix: &'t str,
    matched: Match,
    /// Text after the match, e.g. an unbalanced `)`.
    suffix: &'static str,
}

impl MatchScanner {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            urls: config.urls,
            email: config.email,
            twitter: config.twitter,
            phone: config.phone,
            hashtag: config.hashtag,
            strip_prefix: config.strip_prefix,
            validator: MatchValidator::new(),
        }
    }

    /// Replace every match in `text` with the output of `on_match`.
    ///
    /// Returning `None` from `on_match` keeps the matched text. Context
    /// characters the match needed but does not own are copied around the
    /// replacement, so `on_match = |m| Some(m.matched_text().to_owned())`
    /// reproduces `text` exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use autolinker::MatchScanner;
    ///
    /// let scanner = MatchScanner::default();
    /// let out = scanner.replace("ping @joe or google.com", |m| {
    ///     Some(format!("[{}]", m.kind()))
    /// });
    /// assert_eq!(out, "ping [twitter] or [url]");
    /// ```
    pub fn replace<F>(&self, text: &str, mut on_match: F) -> String
    where
        F: FnMut(&Match) -> Option<String>,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for candidate in Candidates::new(text, MATCHERS) {
            out.push_str(&text[last..candidate.start]);
            match self.resolve(text, &candidate) {
                Some(resolved) => {
                    out.push_str(resolved.prefix);
                    match on_match(&resolved.matched) {
                        Some(replacement) => out.push_str(&replacement),
                        None => out.push_str(resolved.matched.matched_text()),
                    }
                    out.push_str(resolved.suffix);
                }
                None => out.push_str(&text[candidate.start..candidate.end]),
            }
            last = candidate.end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// List the matches in `text` without rewriting it.
    #[must_use]
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        Candidates::new(text, MATCHERS)
            .filter_map(|candidate| self.resolve(text, &candidate))
            .map(|resolved| resolved.matched)
            .collect()
    }

    fn is_enabled(&self, kind: &CandidateKind<'_>) -> bool {
        match kind {
            CandidateKind::Twitter { .. } => self.twitter,
            CandidateKind::Email => self.email,
            CandidateKind::Url { .. } => self.urls,
            CandidateKind::Phone => self.phone,
            CandidateKind::Hashtag { .. } => self.hashtag.is_some(),
        }
    }

    fn resolve<'t>(&self, text: &'t str, candidate: &Candidate<'t>) -> Option<Resolved<'t>> {
        let span = &text[candidate.start..candidate.end];
        if !self.is_enabled(&candidate.kind) {
            log::trace!("skipping disabled {:?} candidate {span:?}", candidate.kind);
            return None;
        }
        if let CandidateKind::Url {
            protocol_url,
            protocol_relative,
        } = candidate.kind
            && !self.validator.is_valid(span, protocol_url, protocol_relative)
        {
            log::trace!("rejecting url candidate {span:?}");
            return None;
        }

        let (end, suffix) = if has_unbalanced_closing_paren(span) {
            (candidate.end - 1, ")")
        } else {
            (candidate.end, "")
        };
        let prefix = &text[candidate.start..candidate.body_start];
        let matched_text = &text[candidate.body_start..end];

        let matched = match candidate.kind {
            CandidateKind::Twitter { handle } => {
                Match::Twitter(TwitterMatch::new(matched_text, handle))
            }
            CandidateKind::Email => Match::Email(EmailMatch::new(matched_text, matched_text)),
            CandidateKind::Url {
                protocol_url,
                protocol_relative,
            } => Match::Url(UrlMatch::new(
                matched_text,
                protocol_url.is_some(),
                protocol_relative.is_some(),
                self.strip_prefix,
            )),
            CandidateKind::Phone => Match::Phone(PhoneMatch::new(matched_text)),
            CandidateKind::Hashtag { tag } => {
                let service = self.hashtag?;
                Match::Hashtag(HashtagMatch::new(matched_text, tag, service))
            }
        };
        Some(Resolved {
            prefix,
            matched,
            suffix,
        })
    }
}

/// A trailing `)` belongs to the surrounding text when the span holds more
/// closing than opening parentheses.
///
/// Only one `)` is ever given back, however many are unbalanced.
fn has_unbalanced_closing_paren(span: &str) -> bool {
    span.ends_with(')') && span.matches('(').count() < span.matches(')').count()
}

/// Leftmost-first iteration over the candidates of every matcher.
///
/// Each matcher's next candidate is cached and only searched again once the
/// scan has moved past its start, so every matcher walks the text once.
struct Candidates<'t, const N: usize> {
    text: &'t str,
    pos: usize,
    matchers: [Matcher; N],
    slots: [Slot<'t>; N],
}

#[derive(Debug, Clone, Copy)]
enum Slot<'t> {
    Unknown,
    Found(Candidate<'t>),
    Exhausted,
}

impl<'t, const N: usize> Candidates<'t, N> {
    fn new(text: &'t str, matchers: [Matcher; N]) -> Self {
        Self {
            text,
            pos: 0,
            matchers,
            slots: [Slot::Unknown; N],
        }
    }
}

impl<'t, const N: usize> Iterator for Candidates<'t, N> {
    type Item = Candidate<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut best: Option<Candidate<'t>> = None;
        for (slot, matcher) in self.slots.iter_mut().zip(self.matchers) {
            let stale = match slot {
                Slot::Unknown => true,
                Slot::Found(candidate) => candidate.start < self.pos,
                Slot::Exhausted => false,
            };
            if stale {
                *slot = matcher(self.text, self.pos).map_or(Slot::Exhausted, Slot::Found);
            }
            if let Slot::Found(candidate) = *slot
                && best.is_none_or(|b| candidate.start < b.start)
            {
                best = Some(candidate);
            }
        }
        let best = best?;
        self.pos = best.end;
        Some(best)
    }
}
