//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the resolve, render and health handlers
//! - Wire up middleware (request ID, tracing, timeout, CORS)
//! - Serve on a bound listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Method, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HandlerConfig;
use crate::http::page::render_handler;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::resolve::resolve_handler;
use crate::lifecycle::ShutdownSignal;
use crate::protocol::{InvalidScheme, RegistrationDirective, Resolver};

/// Liveness probe path.
pub const HEALTH_PATH: &str = "/healthz";

/// Application state injected into handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
    pub directive: Arc<RegistrationDirective>,
}

impl AppState {
    pub fn from_config(config: &HandlerConfig) -> Result<Self, InvalidScheme> {
        Ok(Self {
            resolver: Arc::new(Resolver::from_config(config)?),
            directive: Arc::new(RegistrationDirective::from_config(config)?),
        })
    }
}

/// HTTP server for the protocol handler.
pub struct HttpServer {
    router: Router,
    config: HandlerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given (validated) configuration.
    pub fn new(config: HandlerConfig) -> Result<Self, InvalidScheme> {
        let state = AppState::from_config(&config)?;
        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &HandlerConfig, state: AppState) -> Router {
        let router = Router::new()
            .route(&config.endpoints.resolve_path, get(resolve_handler))
            .route(&config.endpoints.render_path, get(render_handler))
            .route(HEALTH_PATH, get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %request_id(request.headers()),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }))
            .layer(set_request_id_layer());

        if config.cors.enabled {
            router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::HEAD]),
            )
        } else {
            router
        }
    }

    /// The fully layered router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained first.
    pub async fn run(self, listener: TcpListener, shutdown: ShutdownSignal) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            scheme = %self.config.protocol.scheme,
            handler = %self.config.endpoints.handler_template(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn health_handler() -> &'static str {
    "ok"
}
