//! Custom scheme identifiers.
//!
//! Browsers only let pages register a handler for `web+` schemes or for a
//! fixed safelist of well-known schemes, so the identifier is checked once
//! when configuration is loaded instead of failing silently in the browser.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Schemes a page may register without the `web+` prefix.
pub const SAFELISTED_SCHEMES: &[&str] = &[
    "bitcoin", "cabal", "dat", "did", "dweb", "ethereum", "ftp", "ftps", "geo", "hyper", "im",
    "ipfs", "ipns", "irc", "ircs", "magnet", "mailto", "matrix", "mms", "news", "nntp",
    "openpgp4fpr", "sftp", "sip", "sms", "smsto", "ssb", "ssh", "tel", "urn", "webcal", "wtai",
    "xmpp",
];

const CUSTOM_PREFIX: &str = "web+";

/// A scheme name a handler can be registered for, without the trailing `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is neither `web+` followed by lowercase ASCII letters nor a safelisted scheme")]
pub struct InvalidScheme(pub String);

impl Scheme {
    pub fn parse(name: &str) -> Result<Self, InvalidScheme> {
        let valid = match name.strip_prefix(CUSTOM_PREFIX) {
            Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_lowercase()),
            None => SAFELISTED_SCHEMES.contains(&name),
        };
        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(InvalidScheme(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when `other` names this scheme. URL parsers lowercase schemes.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self("web+foo".to_string())
    }
}

impl FromStr for Scheme {
    type Err = InvalidScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
