//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use sender::{HttpServer, ServerConfig, Shutdown};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral port until the returned `Shutdown` is triggered.
pub async fn spawn_server(config: ServerConfig, app: Router) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, app);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}

/// A client that never follows redirects, so 3xx responses can be inspected.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
