//! Response shaping for Axum handlers.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server (request ID, timeout, trace)
//!                          │
//!                          ▼
//!                      http::extract ── fresh Sender per request
//!                          │
//!                          ▼
//!                      handler ── status() + one terminal call
//!                          │          (json / html / xml / text / bool /
//!                          │           error / redirect / file)
//!                          ▼
//!     Client Response  http::writer ── status, Content-Type, Location,
//!     ◀───────────────                  Content-Disposition, body
//! ```
//!
//! Handlers return [`Reply`], so encoding failures propagate with `?` and
//! become a 500 with an `{"error": ...}` body.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routes;
pub mod sender;

pub use config::ServerConfig;
pub use http::{HttpServer, ResponseWriter};
pub use lifecycle::Shutdown;
pub use sender::{ContentType, DataType, Reply, SendError, Sender};
