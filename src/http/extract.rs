//! Per-request `Sender` extraction.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::http::writer::ResponseWriter;
use crate::sender::Sender;

/// A fresh `Sender` for every request, finished by the writer the server
/// installed in request extensions (or the default writer).
impl<S> FromRequestParts<S> for Sender
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let writer = parts
            .extensions
            .get::<ResponseWriter>()
            .copied()
            .unwrap_or_default();

        Ok(Sender::with_writer(writer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};

    #[tokio::test]
    async fn test_uses_installed_writer() {
        let writer = ResponseWriter::new(StatusCode::SEE_OTHER, false);
        let request = Request::builder()
            .extension(writer)
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let sender = Sender::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(sender.writer, writer);
        assert_eq!(sender.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_falls_back_to_default_writer() {
        let (mut parts, _) = Request::new(Body::empty()).into_parts();

        let sender = Sender::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(sender.writer, ResponseWriter::default());
    }
}
