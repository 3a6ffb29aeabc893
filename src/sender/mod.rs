//! Response shaping subsystem.
//!
//! # Data Flow
//! ```text
//! handler logic
//!     → Sender (optional status, then one terminal call)
//!     → envelope.rs (JSON encoding of result / error payloads)
//!     → http::writer (status line, headers, body)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - One `Sender` per request, owned by the handler that extracted it
//! - Terminal calls overwrite all output state; last write wins
//! - `error` only promotes the status to 400 while it is still 200
//! - Encoding failures are returned to the caller, never swallowed

mod envelope;
mod types;

pub use types::{ContentType, DataType, SendError};

use std::fmt::Display;

use axum::http::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::http::writer::ResponseWriter;

/// Handler result: a finished sender, or the encoding failure that stopped it.
pub type Reply = Result<Sender, SendError>;

/// Accumulates everything needed to produce one HTTP response.
#[derive(Debug, Clone)]
pub struct Sender {
    pub(crate) status: StatusCode,
    pub(crate) data_type: Option<DataType>,
    pub(crate) content_type: Option<ContentType>,
    pub(crate) body: Vec<u8>,
    pub(crate) value: String,
    pub(crate) headers: HeaderMap,
    pub(crate) writer: ResponseWriter,
}

impl Sender {
    /// Create an empty sender with the default response writer.
    pub fn new() -> Self {
        Self::with_writer(ResponseWriter::default())
    }

    /// Create an empty sender that will be finished by `writer`.
    pub fn with_writer(writer: ResponseWriter) -> Self {
        Self {
            status: StatusCode::OK,
            data_type: None,
            content_type: None,
            body: Vec::new(),
            value: String::new(),
            headers: HeaderMap::new(),
            writer,
        }
    }

    /// Live response headers, e.g. for setting cookies before finishing.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Set the response status.
    pub fn status(&mut self, code: StatusCode) -> &mut Self {
        self.status = code;
        self
    }

    /// Respond with an error envelope, or with `bool(true)` when `value` is `None`.
    ///
    /// Strings are used verbatim, errors contribute their message, and any
    /// other value is formatted with `Display`. The status becomes
    /// `400 Bad Request` unless a non-default status was already chosen.
    ///
    /// An `Option` argument needs the message type named, e.g.
    /// `error::<&str, _>(None)`.
    pub fn error<M, V>(&mut self, value: V) -> Result<(), SendError>
    where
        V: Into<Option<M>>,
        M: Display,
    {
        let Some(value) = value.into() else {
            return self.bool(true);
        };

        let message = value.to_string();
        if self.status == StatusCode::OK {
            self.status = StatusCode::BAD_REQUEST;
        }
        self.finish(DataType::Error, Some(ContentType::Json), envelope::error(&message))
    }

    /// Always an error envelope; never the `bool(true)` path.
    pub fn fail<M: Display>(&mut self, message: M) -> Result<(), SendError> {
        self.error::<M, _>(Some(message))
    }

    pub fn json<T>(&mut self, value: &T) -> Result<(), SendError>
    where
        T: Serialize + ?Sized,
    {
        self.finish(DataType::Json, Some(ContentType::Json), envelope::result(value))
    }

    /// Raw markup, written without an envelope.
    pub fn html(&mut self, value: impl Into<String>) -> Result<(), SendError> {
        let bytes = value.into().into_bytes();
        self.finish(DataType::Html, Some(ContentType::Html), Ok(bytes))
    }

    /// Tagged as XML, but the body is the same JSON `result` envelope as `json`.
    pub fn xml(&mut self, value: &str) -> Result<(), SendError> {
        self.finish(DataType::Xml, Some(ContentType::Xml), envelope::result(value))
    }

    /// JSON `result` envelope holding a string, served as `application/json`.
    pub fn text(&mut self, value: &str) -> Result<(), SendError> {
        self.finish(DataType::Text, Some(ContentType::Json), envelope::result(value))
    }

    pub fn bool(&mut self, value: bool) -> Result<(), SendError> {
        self.finish(DataType::Bool, Some(ContentType::Json), envelope::result(&value))
    }

    /// Record a redirect target. The writer issues the 3xx and `Location`.
    pub fn redirect(&mut self, url: impl Into<String>) -> Result<(), SendError> {
        self.finish(DataType::Redirect, None, Ok(Vec::new()))?;
        self.value = url.into();
        Ok(())
    }

    /// Send `data` as a binary download named `name`.
    pub fn file(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Result<(), SendError> {
        self.finish(DataType::Stream, Some(ContentType::OctetStream), Ok(data.into()))?;
        self.value = name.into();
        Ok(())
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.data_type
    }

    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Redirect target or download filename; empty for other data types.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace all output state. Status and headers are left alone.
    fn finish(
        &mut self,
        data_type: DataType,
        content_type: Option<ContentType>,
        body: Result<Vec<u8>, SendError>,
    ) -> Result<(), SendError> {
        self.data_type = Some(data_type);
        self.content_type = content_type;
        self.value.clear();

        match body {
            Ok(bytes) => {
                self.body = bytes;
                Ok(())
            }
            Err(e) => {
                self.body.clear();
                tracing::warn!(data_type = %data_type, error = %e, "Response encoding failed");
                Err(e)
            }
        }
    }
}

impl Default for Sender {
    fn default() -> Self {
        Self::new()
    }
}
