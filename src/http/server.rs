//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the application router with the response writer and middleware
//! - Wire up request ID, timeout and tracing layers
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::{Extension, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::http::request::{propagate_request_id_layer, request_span, set_request_id_layer};
use crate::http::writer::ResponseWriter;

/// HTTP server hosting handlers that respond through `Sender`.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server serving `app` with the given configuration.
    pub fn new(config: ServerConfig, app: Router) -> Self {
        let router = Self::build_router(&config, app);
        Self { router, config }
    }

    /// Apply the writer extension and all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, app: Router) -> Router {
        let writer = ResponseWriter::from_config(&config.response);

        app.layer(Extension(writer))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
