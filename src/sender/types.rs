//! Output tags and error definitions for the sender.

use std::fmt;
use thiserror::Error;

/// Which terminal operation produced the current output.
///
/// Read by the response writer to decide how to finish the response
/// (write a body, issue a redirect, attach a file).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Json,
    Error,
    Html,
    Xml,
    Text,
    Bool,
    Redirect,
    Stream,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Json => "json",
            DataType::Error => "error",
            DataType::Html => "html",
            DataType::Xml => "xml",
            DataType::Text => "text",
            DataType::Bool => "bool",
            DataType::Redirect => "redirect",
            DataType::Stream => "stream",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MIME type written to the `Content-Type` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Json,
    Html,
    Xml,
    OctetStream,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Html => "text/html",
            ContentType::Xml => "application/xml",
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Errors raised while shaping a response.
#[derive(Debug, Error)]
pub enum SendError {
    /// The payload could not be converted to its wire representation.
    #[error("failed to encode response body: {0}")]
    Encoding(#[from] serde_json::Error),
}
