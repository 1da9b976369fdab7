//! Errors raised while configuring a [`Linker`](crate::Linker).

use std::fmt;

/// Configuration error reported when a [`Config`](crate::Config) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The hashtag service is neither `twitter` nor `facebook`.
    InvalidHashtagService(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHashtagService(value) => write!(
                f,
                "invalid `hashtag` service {value:?}: expected `twitter` or `facebook`"
            ),
        }
    }
}

impl std::error::Error for Error {}
