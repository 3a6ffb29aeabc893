//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → extract.rs (fresh Sender per request)
//!     → application handler (terminal call on the Sender)
//!     → writer.rs (status, headers, body)
//!     → Send to client
//! ```

pub mod extract;
pub mod request;
pub mod server;
pub mod writer;

pub use request::X_REQUEST_ID;
pub use server::HttpServer;
pub use writer::ResponseWriter;
