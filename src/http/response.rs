//! Plain-text response construction.
//!
//! Every response this service sends is `text/plain` with a
//! newline-terminated body.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

pub const TEXT_PLAIN: &str = "text/plain";

/// Build a `text/plain` response, appending a trailing newline if missing.
pub fn plain_text(status: StatusCode, body: impl Into<String>) -> Response {
    let mut body = body.into();
    if !body.ends_with('\n') {
        body.push('\n');
    }

    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
}
