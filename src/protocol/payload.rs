//! Payload model: what goes into a protocol URL and what comes back out.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Number, Value};
use url::Url;

use crate::protocol::codec;
use crate::protocol::error::ProtocolError;
use crate::protocol::scheme::Scheme;

/// A custom-scheme URL whose hostname carries an encoded payload.
///
/// The raw text is kept exactly as received. Resolution encodes the raw text,
/// not a re-serialisation, so the page can show the URL the browser actually
/// activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolUrl {
    raw: String,
    scheme: String,
    host: String,
}

impl ProtocolUrl {
    /// Parse a URL that must have a scheme and a non-empty hostname.
    pub fn parse(raw: &str) -> Result<Self, ProtocolError> {
        let url = Url::parse(raw).map_err(|e| ProtocolError::malformed(raw, e))?;
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(ProtocolError::malformed(raw, "missing hostname")),
        };

        Ok(Self {
            raw: raw.to_string(),
            scheme: url.scheme().to_string(),
            host,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Scheme as reported by the URL parser (lowercased).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The encoded payload.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Decode the hostname back into the payload text.
    pub fn payload_text(&self) -> Result<String, ProtocolError> {
        Ok(codec::decode(&self.host)?)
    }
}

impl std::fmt::Display for ProtocolUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Producer-side payload: a JSON object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Parse JSON text that must be an object.
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// Compact JSON, the text that is encoded into the hostname.
    pub fn to_json(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }

    /// Build `SCHEME://<encoded JSON>`.
    pub fn to_protocol_url(&self, scheme: &Scheme) -> ProtocolUrl {
        let host = codec::encode(&self.to_json());
        ProtocolUrl {
            raw: format!("{}://{}", scheme, host),
            scheme: scheme.as_str().to_string(),
            host,
        }
    }
}

/// JSON recovered from a protocol URL, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPayload {
    value: Value,
    pretty: String,
}

impl DisplayPayload {
    /// Parse decoded payload text. Object key order is preserved.
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text)?;
        let pretty = pretty_print(&value)?;
        Ok(Self { value, pretty })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Tab-indented rendering. Whole-number floats print as integers.
    pub fn as_str(&self) -> &str {
        &self.pretty
    }
}

fn pretty_print(value: &Value) -> Result<String, serde_json::Error> {
    let mut value = value.clone();
    integral_floats_to_ints(&mut value);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Largest magnitude at which every whole f64 is exactly an i64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// `1.0` becomes `1`. Larger whole floats keep serde_json's exponent form.
fn integral_floats_to_ints(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_to_ints),
        Value::Object(fields) => fields.values_mut().for_each(integral_floats_to_ints),
        _ => {}
    }
}
