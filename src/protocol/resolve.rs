//! Resolution mapping: protocol URL → HTTP URL of the render page.
//!
//! # Design Decisions
//! - The whole activated URL is encoded, not only its hostname
//! - The encoded form is URL-safe base64, so it is appended without
//!   percent-encoding and `req` is the only query parameter
//! - Pure and synchronous; it sits on every protocol activation

use std::fmt;

use crate::config::HandlerConfig;
use crate::protocol::codec;
use crate::protocol::error::ProtocolError;
use crate::protocol::payload::ProtocolUrl;
use crate::protocol::scheme::{InvalidScheme, Scheme};

/// Name of the query parameter that carries the encoded protocol URL.
pub const REQUEST_PARAM: &str = "req";

/// HTTP URL the browser is sent to after an activation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedUrl(String);

impl ResolvedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rewrites activated protocol URLs for one registered scheme.
#[derive(Debug, Clone)]
pub struct Resolver {
    scheme: Scheme,
    render_endpoint: String,
}

impl Resolver {
    /// `render_endpoint` is the absolute URL of the render page, without query.
    pub fn new(scheme: Scheme, render_endpoint: impl Into<String>) -> Self {
        Self {
            scheme,
            render_endpoint: render_endpoint.into(),
        }
    }

    pub fn from_config(config: &HandlerConfig) -> Result<Self, InvalidScheme> {
        let scheme = Scheme::parse(&config.protocol.scheme)?;
        Ok(Self::new(scheme, config.endpoints.render_endpoint()))
    }

    /// Where the page lives; also the fallback target for unusable input.
    pub fn render_endpoint(&self) -> &str {
        &self.render_endpoint
    }

    /// Map an activated protocol URL to the render page URL.
    pub fn resolve(&self, raw: &str) -> Result<ResolvedUrl, ProtocolError> {
        let url = ProtocolUrl::parse(raw)?;
        if !self.scheme.matches(url.scheme()) {
            return Err(ProtocolError::UnsupportedScheme {
                expected: self.scheme.to_string(),
                found: url.scheme().to_string(),
            });
        }

        Ok(self.resolve_unchecked(url.as_str()))
    }

    fn resolve_unchecked(&self, raw: &str) -> ResolvedUrl {
        ResolvedUrl(format!(
            "{}?{}={}",
            self.render_endpoint,
            REQUEST_PARAM,
            codec::encode(raw)
        ))
    }
}
