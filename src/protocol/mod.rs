//! Custom scheme protocol core.
//!
//! # Data Flow
//! ```text
//! producer: Payload ─▶ codec::encode ─▶ SCHEME://<encoded JSON>
//!
//! browser activates link
//!     → GET /resolve?url=<protocol URL>
//!     → resolve.rs   (ProtocolUrl → ResolvedUrl, req = encoded URL)
//!     → 302 to /?req=...
//!     → interpret.rs (req → URL text → hostname → DisplayPayload)
//!     → page
//!
//! registration.rs: page actions that bind SCHEME to /resolve?url=%s
//! ```
//!
//! # Design Decisions
//! - Everything here is pure and synchronous; no shared state
//! - `decode(encode(x)) == x` for every string
//! - Failures are values (`ProtocolError`), never panics

pub mod codec;
pub mod error;
pub mod interpret;
pub mod payload;
pub mod registration;
pub mod resolve;
pub mod scheme;

pub use error::{CodecError, ProtocolError};
pub use interpret::{get_data, get_url, interpret, Interpretation, RenderQuery};
pub use payload::{DisplayPayload, Payload, ProtocolUrl};
pub use registration::RegistrationDirective;
pub use resolve::{ResolvedUrl, Resolver, REQUEST_PARAM};
pub use scheme::{InvalidScheme, Scheme};
