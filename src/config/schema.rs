//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the handler
//! service. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the protocol handler service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HandlerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The custom scheme and its display name.
    pub protocol: ProtocolConfig,

    /// Public URL and endpoint paths.
    pub endpoints: EndpointConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Cross-origin settings.
    pub cors: CorsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Scheme registration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Scheme identifier, e.g. "web+foo". Overridden by `HANDLER_PROTOCOL`.
    pub scheme: String,

    /// Human-readable name shown by the browser. Overridden by
    /// `HANDLER_PROTOCOL_NAME`.
    pub name: String,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            scheme: "web+foo".to_string(),
            name: "Foo Protocol".to_string(),
        }
    }
}

/// Where the browser reaches this service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Origin the browser uses, without trailing slash.
    pub public_url: String,

    /// Path of the resolution endpoint registered with the browser.
    pub resolve_path: String,

    /// Path of the render page.
    pub render_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            public_url: "http://localhost:3000".to_string(),
            resolve_path: "/resolve".to_string(),
            render_path: "/".to_string(),
        }
    }
}

impl EndpointConfig {
    fn origin(&self) -> &str {
        self.public_url.trim_end_matches('/')
    }

    /// Absolute URL of the render page. The root path renders as the bare
    /// origin (`http://localhost:3000`).
    pub fn render_endpoint(&self) -> String {
        if self.render_path == "/" {
            self.origin().to_string()
        } else {
            format!("{}{}", self.origin(), self.render_path)
        }
    }

    /// URL template handed to `registerProtocolHandler`.
    pub fn handler_template(&self) -> String {
        format!("{}{}?url=%s", self.origin(), self.resolve_path)
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allow any origin to call the endpoints.
    pub enabled: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log formatter.
    pub log_format: LogFormat,

    /// Expose a Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Address of the Prometheus endpoint.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
