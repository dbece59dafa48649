//! Request interpretation: render-page query → original URL and payload.
//!
//! # Data Flow
//! ```text
//! raw query string
//!     → RenderQuery::from_raw     (first non-empty `req`, never fails)
//!     → decode_request            (req → protocol URL text)      = get_url
//!     → ProtocolUrl::parse        (text → scheme + hostname)
//!     → ProtocolUrl::payload_text (hostname → payload text)
//!     → DisplayPayload::parse     (payload text → pretty JSON)   = get_data
//! ```
//!
//! A missing parameter or a failure at any stage yields `None` for that view.
//! The page renders either way.

use crate::protocol::codec;
use crate::protocol::error::ProtocolError;
use crate::protocol::payload::{DisplayPayload, ProtocolUrl};
use crate::protocol::resolve::REQUEST_PARAM;

/// Query parameters of a render request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderQuery {
    req: Option<String>,
}

impl RenderQuery {
    /// Parse a raw (still percent-encoded) query string.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let req = raw.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, value)| key == REQUEST_PARAM && !value.is_empty())
                .map(|(_, value)| value.into_owned())
        });
        Self { req }
    }

    pub fn with_request(encoded: impl Into<String>) -> Self {
        Self {
            req: Some(encoded.into()),
        }
    }

    /// The encoded protocol URL, if any.
    pub fn request(&self) -> Option<&str> {
        self.req.as_deref()
    }
}

/// Both derived views of one render request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Interpretation {
    pub url: Option<String>,
    pub data: Option<DisplayPayload>,
}

/// Decode the `req` value back into the protocol URL text.
pub fn decode_request(encoded: &str) -> Result<String, ProtocolError> {
    Ok(codec::decode(encoded)?)
}

/// Recover the payload carried in a protocol URL's hostname.
pub fn decode_data(raw_url: &str) -> Result<DisplayPayload, ProtocolError> {
    let url = ProtocolUrl::parse(raw_url)?;
    let text = url.payload_text()?;
    DisplayPayload::parse(&text)
}

/// The original protocol URL, or `None` when `req` is absent or undecodable.
pub fn get_url(query: &RenderQuery) -> Option<String> {
    let encoded = query.request()?;
    decode_request(encoded)
        .inspect_err(|e| tracing::debug!(kind = e.kind(), error = %e, "Unusable req parameter"))
        .ok()
}

/// The pretty-printed payload, or `None` when any stage fails.
pub fn get_data(query: &RenderQuery) -> Option<DisplayPayload> {
    data_for(&get_url(query)?)
}

/// Run both views, decoding `req` once.
pub fn interpret(query: &RenderQuery) -> Interpretation {
    let url = get_url(query);
    let data = url.as_deref().and_then(data_for);
    Interpretation { url, data }
}

fn data_for(raw_url: &str) -> Option<DisplayPayload> {
    decode_data(raw_url)
        .inspect_err(|e| tracing::debug!(kind = e.kind(), error = %e, "No displayable payload"))
        .ok()
}
