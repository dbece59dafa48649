//! Custom URL scheme handler service.
//!
//! Registers a `web+` scheme with the browser and turns activated protocol
//! URLs into a page showing the URL and its decoded JSON payload.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────────┐
//!                 │                 PROTOCOL HANDLER                     │
//!   browser       │  ┌──────────┐    ┌─────────────┐    ┌────────────┐   │
//!   activates ────┼─▶│ /resolve │───▶│  Resolver   │───▶│ 302 to     │───┼──┐
//!   web+foo://... │  │ handler  │    │ (encode URL)│    │ /?req=...  │   │  │
//!                 │  └──────────┘    └─────────────┘    └────────────┘   │  │
//!                 │                                                      │  │
//!   page     ◀────┼──┌──────────┐    ┌─────────────┐                     │  │
//!                 │  │ / page   │◀───│ Interpreter │◀────────────────────┼──┘
//!                 │  │ + script │    │ (decode req)│                     │
//!                 │  └──────────┘    └─────────────┘                     │
//!                 │                                                      │
//!                 │  config · lifecycle · observability                  │
//!                 └──────────────────────────────────────────────────────┘
//! ```

use protocol_handler::config::load_from_env;
use protocol_handler::http::HttpServer;
use protocol_handler::lifecycle::{signals::shutdown_signal, startup::bind_listener, Shutdown};
use protocol_handler::observability::{logging::init_logging, metrics::init_metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    init_logging(config.observability.log_format);

    tracing::info!("protocol-handler v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        scheme = %config.protocol.scheme,
        name = %config.protocol.name,
        bind_address = %config.listener.bind_address,
        public_url = %config.endpoints.public_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = bind_listener(&config).await?;
    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, signal).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
