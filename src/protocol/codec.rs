//! Hostname-safe text encoding.
//!
//! Payloads are base64 in the URL-safe alphabet (`A-Z a-z 0-9 - _`) with `=`
//! padding. None of those characters terminate an opaque URL host or need
//! escaping inside a query value, so the encoded form can be used both as
//! the hostname of a protocol URL and as the `req` parameter of the page.
//!
//! Decoding is lenient about what producers hand us: the standard alphabet
//! (`+ /`) and missing padding are accepted as well.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::protocol::error::CodecError;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode arbitrary text. Total over `&str`.
pub fn encode(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}

/// Inverse of [`encode`].
pub fn decode(payload: &str) -> Result<String, CodecError> {
    let bytes = LENIENT.decode(to_url_safe(payload).as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

fn to_url_safe(payload: &str) -> Cow<'_, str> {
    if payload.contains(['+', '/']) {
        Cow::Owned(payload.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(payload)
    }
}
