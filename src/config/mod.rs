//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file named by HANDLER_CONFIG (loader.rs)
//!     → HANDLER_PROTOCOL / HANDLER_PROTOCOL_NAME overrides (loader.rs)
//!     → validation.rs (semantic checks)
//!     → HandlerConfig (validated, immutable)
//!     → shared with the HTTP layer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The scheme is configured once and feeds both register and unregister

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_from_env, ConfigError};
pub use schema::HandlerConfig;
pub use schema::{
    CorsConfig, EndpointConfig, ListenerConfig, LogFormat, ObservabilityConfig, ProtocolConfig,
};
pub use validation::ValidationError;
