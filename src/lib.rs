//! Custom URL scheme handler service library.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod protocol;

pub use config::HandlerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
