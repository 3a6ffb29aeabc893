//! Finishing a `Sender` into an HTTP response.
//!
//! # Responsibilities
//! - Turn the sender's output tags into status, headers and body
//! - Issue redirects (3xx + `Location`)
//! - Add `Content-Disposition` for file downloads
//! - Map encoding failures to 500 with an error envelope
//!
//! # Design Decisions
//! - Caller headers are applied first; writer-owned headers override them
//! - A sender with no terminal call becomes `204 No Content`
//! - A redirect keeps the sender's status only when it is already 3xx
//! - `Location` is percent-encoded for control and non-ASCII bytes
//! - Non-ASCII filenames get an ASCII fallback plus RFC 6266 `filename*`

use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::config::ResponseConfig;
use crate::sender::{DataType, SendError, Sender};

/// RFC 5987 `attr-char`: everything else in `filename*` is percent-encoded.
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

/// Settings the server layer applies when writing a finished sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseWriter {
    redirect_status: StatusCode,
    attachment_disposition: bool,
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self {
            redirect_status: StatusCode::FOUND,
            attachment_disposition: true,
        }
    }
}

impl ResponseWriter {
    pub fn new(redirect_status: StatusCode, attachment_disposition: bool) -> Self {
        Self {
            redirect_status,
            attachment_disposition,
        }
    }

    /// Build writer settings from config. An invalid redirect status falls back to 302.
    pub fn from_config(config: &ResponseConfig) -> Self {
        let redirect_status = match StatusCode::from_u16(config.redirect_status) {
            Ok(status) if status.is_redirection() => status,
            _ => {
                tracing::warn!(
                    redirect_status = config.redirect_status,
                    "Redirect status is not 3xx, using 302"
                );
                StatusCode::FOUND
            }
        };

        Self::new(redirect_status, config.attachment_disposition)
    }

    pub fn redirect_status(&self) -> StatusCode {
        self.redirect_status
    }

    pub fn attachment_disposition(&self) -> bool {
        self.attachment_disposition
    }

    /// Produce the final response for `sender`.
    pub fn write(&self, sender: Sender) -> Response {
        let Sender {
            status,
            data_type,
            content_type,
            body,
            value,
            headers,
            ..
        } = sender;

        let body_len = body.len();
        let mut response = match data_type {
            Some(DataType::Redirect) => Response::new(Body::empty()),
            _ => Response::new(Body::from(body)),
        };
        *response.headers_mut() = headers;
        *response.status_mut() = status;

        if let Some(content_type) = content_type {
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(content_type.mime()),
            );
        }

        match data_type {
            None => {
                if status == StatusCode::OK {
                    *response.status_mut() = StatusCode::NO_CONTENT;
                }
            }
            Some(DataType::Redirect) => {
                let encoded = utf8_percent_encode(&value, CONTROLS).to_string();
                let location = match HeaderValue::from_str(&encoded) {
                    Ok(location) => location,
                    Err(_) => {
                        tracing::error!(
                            location = %value,
                            "Redirect target is not a valid header value"
                        );
                        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
                    }
                };
                if !status.is_redirection() {
                    *response.status_mut() = self.redirect_status;
                }
                response.headers_mut().insert(header::LOCATION, location);
            }
            Some(DataType::Stream) => {
                if self.attachment_disposition && !value.is_empty() {
                    match HeaderValue::from_str(&attachment(&value)) {
                        Ok(disposition) => {
                            response
                                .headers_mut()
                                .insert(header::CONTENT_DISPOSITION, disposition);
                        }
                        Err(_) => {
                            tracing::warn!(
                                filename = %value,
                                "Filename not usable in Content-Disposition"
                            );
                        }
                    }
                }
            }
            Some(_) => {}
        }

        tracing::debug!(
            status = %response.status(),
            data_type = ?data_type,
            body_len,
            "Writing response"
        );

        response
    }
}

fn attachment(filename: &str) -> String {
    let mut fallback = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            c if c.is_ascii() && !c.is_ascii_control() => fallback.push(c),
            _ => fallback.push('_'),
        }
    }

    if filename.is_ascii() {
        format!("attachment; filename=\"{}\"", fallback)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            utf8_percent_encode(filename, ATTR_CHAR)
        )
    }
}

impl IntoResponse for Sender {
    fn into_response(self) -> Response {
        let writer = self.writer;
        writer.write(self)
    }
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Failed to shape response");
        let body = serde_json::json!({ "error": self.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
