//! Find URLs, email addresses, phone numbers, Twitter handles and hashtags in
//! text and wrap them in HTML anchor tags.
//!
//! Input may already contain HTML. Tags, comments and character entities are
//! copied through untouched, and text inside existing `<a>` elements is never
//! linked again.
//!
//! ```
//! use autolinker::{Config, Linker};
//!
//! let linker = Linker::new(Config {
//!     class_name: "myLink".to_string(),
//!     ..Config::default()
//! });
//! assert_eq!(
//!     linker.link("Joe went to www.yahoo.com"),
//!     r#"Joe went to <a href="http://www.yahoo.com" class="myLink myLink-url" target="_blank">yahoo.com</a>"#
//! );
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod ellipsis;
pub mod error;
pub mod html;
pub mod io;
pub mod linker;
pub mod matches;
pub mod scanner;
pub mod tag;
pub mod validator;

pub use config::{Config, ConfigBuilder, HashtagService, ReplaceFn, Replacement};
pub use error::Error;
pub use html::{HtmlNode, HtmlTokenizer, NodeKind};
pub use linker::{Linker, link};
pub use matches::{EmailMatch, HashtagMatch, Match, MatchKind, PhoneMatch, TwitterMatch, UrlMatch};
pub use scanner::MatchScanner;
pub use tag::{AnchorTagBuilder, HtmlTag};
pub use validator::MatchValidator;
