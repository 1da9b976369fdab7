//! Regular expressions behind the scanner's matchers.
//!
//! Patterns follow the usual ASCII-only notion of a word character
//! (`[A-Za-z0-9_]`) and of a digit, whatever the surrounding text contains.
//! Boundaries the regex engine cannot express (a non-word character before
//! `@` or `#`, a scheme that is not followed by another scheme or a port) are
//! checked by the matchers in code.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that looks like a host name, never ending in a dot.
const DOMAIN: &str = r"[A-Za-z0-9.\-]*[A-Za-z0-9\-]";

/// Optional path, query string and fragment. The final character may not be
/// sentence punctuation (`?!:,.;`).
const URL_SUFFIX: &str = concat!(
    r"[\-A-Za-z0-9+&@#/%=~_()|'$*\[\]?!:,.;]*",
    r"[\-A-Za-z0-9+&@#/%=~_()|'$*\[\]]",
);

/// Recognised top-level domains, separated by whitespace. Longer names come
/// first so that a domain ending in `.company` is not cut short at `.co`.
const TLDS: &str = concat!(
    "international construction contractors enterprises photography productions ",
    "foundation immobilien industries management properties technology christmas ",
    "community directory education equipment institute marketing solutions vacations ",
    "bargains boutique builders catering cleaning clothing computer democrat diamonds ",
    "graphics holdings lighting partners plumbing supplies training ventures academy ",
    "careers company cruises domains exposed flights florist gallery guitars holiday ",
    "kitchen neustar okinawa recipes rentals reviews shiksha singles support systems ",
    "agency berlin camera center coffee condos dating estate events expert futbol kaufen ",
    "luxury maison monash museum nagoya photos repair report social supply tattoo tienda ",
    "travel viajes villas vision voting voyage actor build cards cheap codes dance email ",
    "glass house mango ninja parts photo shoes solar today tokyo tools watch works aero ",
    "arpa asia best bike blue buzz camp club cool coop farm fish gift guru info jobs kiwi ",
    "kred land limo link menu mobi moda name pics pink post qpon rich ruhr sexy tips vote ",
    "voto wang wien wiki zone bar bid biz cab cat ceo com edu gov int kim mil net onl org ",
    "pro pub red tel uno wed xxx xyz ac ad ae af ag ai al am an ao aq ar as at au aw ax ",
    "az ba bb bd be bf bg bh bi bj bm bn bo br bs bt bv bw by bz ca cc cd cf cg ch ci ck ",
    "cl cm cn co cr cu cv cw cx cy cz de dj dk dm do dz ec ee eg er es et eu fi fj fk fm ",
    "fo fr ga gb gd ge gf gg gh gi gl gm gn gp gq gr gs gt gu gw gy hk hm hn hr ht hu id ",
    "ie il im in io iq ir is it je jm jo jp ke kg kh ki km kn kp kr kw ky kz la lb lc li ",
    "lk lr ls lt lu lv ly ma mc md me mg mh mk ml mm mn mo mp mq mr ms mt mu mv mw mx my ",
    "mz na nc ne nf ng ni nl no np nr nu nz om pa pe pf pg ph pk pl pm pn pr ps pt pw py ",
    "qa re ro rs ru rw sa sb sc sd se sg sh si sj sk sl sm sn so sr st su sv sx sy sz tc ",
    "td tf tg th tj tk tl tm tn to tp tr tt tv tw tz ua ug uk us uy uz va vc ve vg vi vn ",
    "vu wf ws ye yt za zm zw",
);

fn tld() -> String {
    let alternatives: Vec<_> = TLDS.split_whitespace().collect();
    format!(r"\.(?:{})(?-u:\b)", alternatives.join("|"))
}

pub(crate) static HANDLE_RE: LazyLock<Regex> =
    lazy_regex!(r"@([A-Za-z0-9_]{1,15})", "twitter handle pattern should compile");

pub(crate) static HASHTAG_RE: LazyLock<Regex> =
    lazy_regex!(r"#([A-Za-z0-9_]{1,15})", "hashtag pattern should compile");

pub(crate) static EMAIL_RE: LazyLock<Regex> = lazy_regex!(
    &format!(r"(?i)[\-;:&=+$,A-Za-z0-9_.]+@{DOMAIN}{}", tld()),
    "email pattern should compile",
);

/// A scheme-prefixed URL such as `http://host` or `mailto:x`.
///
/// `scheme` ends at the `:`; the matcher rejects schemes followed by a digit
/// (`host:8080`) or by a second scheme (`link:http://...`).
pub(crate) static PROTOCOL_URL_RE: LazyLock<Regex> = lazy_regex!(
    &format!(
        r"(?i)(?P<protocol_url>(?P<scheme>[A-Za-z][-.+A-Za-z0-9]+:)(?://)?{DOMAIN})(?:{URL_SUFFIX})?"
    ),
    "protocol url pattern should compile",
);

/// A `www.` URL, optionally protocol-relative. `relative` holds the `//` and
/// the character before it, if any.
pub(crate) static WWW_URL_RE: LazyLock<Regex> = lazy_regex!(
    &format!(r"(?i)(?P<relative>.?//)?www\.{DOMAIN}(?:{URL_SUFFIX})?"),
    "www url pattern should compile",
);

/// A bare domain ending in a known TLD, optionally protocol-relative.
pub(crate) static TLD_URL_RE: LazyLock<Regex> = lazy_regex!(
    &format!(r"(?i)(?P<relative>.?//)?{DOMAIN}{}(?:{URL_SUFFIX})?", tld()),
    "tld url pattern should compile",
);

/// A second scheme straight after the first one's `:`.
pub(crate) static NESTED_SCHEME_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^[A-Za-z][-.+A-Za-z0-9]+://",
    "nested scheme pattern should compile",
);

/// USA-style phone numbers: `(555) 555-5555`, `+1 555.555.5555`, `555 555 5555`.
pub(crate) static PHONE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?:\+?[0-9]{1,3}[-\s.])?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.][0-9]{4}",
    "phone pattern should compile",
);
