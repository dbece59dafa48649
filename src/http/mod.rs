//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (x-request-id)
//!     → resolve.rs  GET /resolve?url=...  → 302 Location: /?req=...
//!     → page.rs     GET /?req=...         → 200 text/html
//! ```

pub mod page;
pub mod request;
pub mod resolve;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer, HEALTH_PATH};
