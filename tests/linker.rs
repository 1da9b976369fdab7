//! End-to-end behaviour of [`Linker::link`] on text and HTML input.

use autolinker::{Config, Error, HashtagService, Linker, Match, Replacement, link};

#[macro_use]
mod prelude;
use prelude::*;

#[fixture]
fn linker() -> Linker { Linker::default() }

#[rstest]
#[case::plain("Hello world")]
#[case::numbers("1.0 and 2.5 and 555-5555")]
#[case::local_host("a@b and user@localhost")]
#[case::hashtag_off("so #blessed")]
#[case::markup("<p class=\"x\">plain &amp; simple</p>")]
#[case::port_only(":8080/path")]
#[case::empty("")]
fn text_without_matches_is_unchanged(linker: Linker, #[case] input: &str) {
    assert_eq!(linker.link(input), input);
}

#[rstest]
#[case::anchor_text(r#"<a href="x">visit google.com</a>"#)]
#[case::anchor_markup(r#"<A HREF="http://google.com"><b>google.com</b></A>"#)]
#[case::comment("<!-- mail me@foo.com -->")]
fn existing_links_and_comments_are_not_relinked(linker: Linker, #[case] input: &str) {
    assert_eq!(linker.link(input), input);
}

#[test]
fn linking_twice_is_stable() {
    let linker = Linker::default();
    let once = linker.link("see google.com and @joe");
    assert_eq!(linker.link(&once), once);
}

#[rstest]
#[case::urls(Config { urls: false, ..Config::default() }, "go to google.com")]
#[case::email(Config { email: false, ..Config::default() }, "mail me@foo.com")]
#[case::twitter(Config { twitter: false, ..Config::default() }, "hi @joe")]
#[case::phone(Config { phone: false, ..Config::default() }, "call 555-555-5555")]
fn disabled_kinds_leave_text_unchanged(#[case] config: Config, #[case] input: &str) {
    assert_eq!(Linker::new(config).link(input), input);
}

#[test]
fn disabled_email_is_not_relinked_as_url() {
    let config = Config {
        email: false,
        ..Config::default()
    };
    assert_eq!(link("me@foo.com", &config), "me@foo.com");
}

#[rstest]
fn balanced_parens_stay_in_the_link(linker: Linker) {
    let input = "wikipedia.com/Foo_(disambiguation)";
    assert_eq!(
        linker.link(input),
        anchor(&format!("http://{input}"), input)
    );
}

#[rstest]
fn wrapping_parens_stay_outside_the_link(linker: Linker) {
    assert_eq!(
        linker.link("(see google.com)"),
        html!["(see ", &anchor("http://google.com", "google.com"), ")"]
    );
}

#[rstest]
fn only_one_unbalanced_paren_is_excluded(linker: Linker) {
    // Balance is judged over the match alone, and a single `)` is given back.
    assert_eq!(
        linker.link("((google.com/a))"),
        html!["((", &anchor("http://google.com/a)", "google.com/a)"), ")"]
    );
}

#[rstest]
#[case::bare("visit google.com", "visit ", "http://google.com", "google.com")]
#[case::www("visit www.google.com", "visit ", "http://www.google.com", "google.com")]
#[case::https("at https://google.com/", "at ", "https://google.com/", "google.com")]
#[case::relative("Go to //google.com", "Go to ", "//google.com", "google.com")]
#[case::query(
    "see google.com/?a=1&amp;b=2",
    "see ",
    "http://google.com/?a=1&b=2",
    "google.com/?a=1&amp;b=2"
)]
fn url_href_and_text(
    linker: Linker,
    #[case] input: &str,
    #[case] lead: &str,
    #[case] href: &str,
    #[case] text: &str,
) {
    assert_eq!(linker.link(input), html![lead, &anchor(href, text)]);
}

#[rstest]
#[case::word_before_slashes("abc//google.com")]
#[case::scheme_without_dot("git:d")]
#[case::script("javascript:alert(1)")]
#[case::scheme_without_letters("git:1.0")]
fn suspicious_urls_are_left_alone(linker: Linker, #[case] input: &str) {
    assert_eq!(linker.link(input), input);
}

#[rstest]
#[case::twitter(HashtagService::Twitter, "https://twitter.com/hashtag/news")]
#[case::facebook(HashtagService::Facebook, "https://www.facebook.com/hashtag/news")]
fn hashtags_follow_the_configured_service(#[case] service: HashtagService, #[case] href: &str) {
    let config = Config {
        hashtag: Some(service),
        ..Config::default()
    };
    assert_eq!(
        link("great #news", &config),
        html!["great ", &anchor(href, "#news")]
    );
}

#[test]
fn hashtag_service_is_validated_on_build() {
    let err = Config::builder().hashtag("myspace").build().unwrap_err();
    assert_eq!(err, Error::InvalidHashtagService("myspace".to_string()));
}

#[rstest]
fn email_takes_precedence_over_its_domain(linker: Linker) {
    assert_eq!(
        linker.link("mail me@foo.com"),
        html!["mail ", &anchor("mailto:me@foo.com", "me@foo.com")]
    );
}

#[rstest]
fn entities_are_preserved(linker: Linker) {
    assert_eq!(
        linker.link("1 &lt; 2 visit google.com&nbsp;now"),
        html![
            "1 &lt; 2 visit ",
            &anchor("http://google.com", "google.com"),
            "&nbsp;now"
        ]
    );
}

#[rstest]
fn handles_and_phones_are_linked(linker: Linker) {
    assert_eq!(
        linker.link("hi @joe! call (555) 555-5555"),
        html![
            "hi ",
            &anchor("https://twitter.com/joe", "@joe"),
            "! call ",
            &anchor("tel:5555555555", "(555) 555-5555"),
        ]
    );
}

#[test]
fn anchor_options_shape_the_tag() {
    let config = Config::builder()
        .class_name("myLink")
        .new_window(false)
        .strip_prefix(false)
        .truncate(15)
        .build()
        .unwrap();
    insta::assert_snapshot!(
        link("read http://www.example.com/docs", &config),
        @r#"read <a href="http://www.example.com/docs" class="myLink myLink-url">http://www.ex..</a>"#
    );
}

#[rstest]
fn links_inside_html(linker: Linker) {
    insta::assert_snapshot!(
        linker.link("<p>Email joe@example.com or see http://example.com/docs.</p>"),
        @r#"<p>Email <a href="mailto:joe@example.com" target="_blank">joe@example.com</a> or see <a href="http://example.com/docs" target="_blank">example.com/docs</a>.</p>"#
    );
}

#[test]
fn replace_fn_chooses_per_match() {
    let config = Config::builder()
        .replace_fn(|_, m| match m {
            Match::Email(_) => Replacement::Skip,
            Match::Twitter(t) => Replacement::Text(format!("[{}]", t.handle())),
            _ => Replacement::Default,
        })
        .build()
        .unwrap();
    assert_eq!(
        link("me@x.com @joe google.com", &config),
        html!["me@x.com [joe] ", &anchor("http://google.com", "google.com")]
    );
}

#[test]
fn one_linker_serves_many_threads() {
    let linker = Linker::default();
    let expected = linker.link("see google.com");
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(linker.link("see google.com"), expected));
        }
    });
}

#[test]
fn many_urls_link_in_linear_time() {
    let input = "see google.com ".repeat(40_000);
    let started = std::time::Instant::now();
    let out = Linker::default().link(&input);
    assert_eq!(out.matches("<a href=").count(), 40_000);
    assert!(
        started.elapsed() < std::time::Duration::from_secs(30),
        "linking took {:?}",
        started.elapsed()
    );
}
