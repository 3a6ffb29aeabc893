//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields: status, data_type)
//!     → http::request span (method, uri, request_id) around each request
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout (pretty or JSON lines)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level
//! - JSON format for production, pretty format for development

pub mod logging;

pub use logging::init_logging;
