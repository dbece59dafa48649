//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the configured listen address
//! - Emit the startup log line with the bound port
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - Configuration is loaded and validated before anything binds

use tokio::net::TcpListener;

use crate::config::HandlerConfig;

pub async fn bind_listener(config: &HandlerConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        port = local_addr.port(),
        "listening on port: {}",
        local_addr.port()
    );
    Ok(listener)
}
