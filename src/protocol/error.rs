//! Error kinds for the payload pipeline.
//!
//! None of these are fatal. The HTTP layer turns every one of them into an
//! absent panel or a redirect to the bare page.

use thiserror::Error;

/// Failures of [`codec::decode`](crate::protocol::codec::decode).
#[derive(Debug, Error)]
pub enum CodecError {
    /// Input is not base64 in either the URL-safe or the standard alphabet.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Bytes decoded fine but are not UTF-8 text.
    #[error("decoded bytes are not UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Failures while building or interpreting protocol URLs.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Input does not parse as `scheme://host...`.
    #[error("malformed protocol URL `{input}`: {reason}")]
    MalformedUrl { input: String, reason: String },

    /// URL parsed, but carries a scheme this handler was not registered for.
    #[error("unsupported scheme `{found}`, expected `{expected}`")]
    UnsupportedScheme { expected: String, found: String },

    /// Hostname or `req` parameter was not produced by the encoder.
    #[error("payload decode failed: {0}")]
    DecodeFailure(#[from] CodecError),

    /// Decoded hostname is not JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidPayloadJson(#[from] serde_json::Error),
}

impl ProtocolError {
    pub(crate) fn malformed(input: &str, reason: impl ToString) -> Self {
        ProtocolError::MalformedUrl {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ProtocolError::MalformedUrl { .. } => "malformed_url",
            ProtocolError::UnsupportedScheme { .. } => "unsupported_scheme",
            ProtocolError::DecodeFailure(_) => "decode_failure",
            ProtocolError::InvalidPayloadJson(_) => "invalid_payload_json",
        }
    }
}
