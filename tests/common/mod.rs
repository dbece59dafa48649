//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use protocol_handler::config::HandlerConfig;
use protocol_handler::http::HttpServer;
use protocol_handler::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A handler service on an ephemeral port. Dropping it stops the server.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) -> std::io::Result<()> {
        self.shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked")
    }
}

/// Start a server whose public URL points at its own listener.
pub async fn start_server(mut config: HandlerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();
    config.endpoints.public_url = format!("http://{}", addr);

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, signal).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never follows redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
