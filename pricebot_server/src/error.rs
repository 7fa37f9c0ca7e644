//! Request rejections of the webhook endpoint.
//!
//! A `Rejection` ends request handling before any command runs. It maps to a
//! fixed status code and a fixed plain-text body, so callers never see
//! internal error details. Command failures are not rejections: they are
//! answered with a regular message (see `dispatcher`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Reasons for refusing an interaction request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Signature or timestamp header absent.
    #[error("Invalid request signature")]
    MissingSignature,

    /// Signature does not verify against the configured public key.
    #[error("Invalid request signature")]
    InvalidSignature,

    /// Authentic body that is not an interaction payload.
    #[error("Malformed interaction payload")]
    MalformedPayload,

    /// Interaction type or command the bot does not handle.
    #[error("Unknown interaction type")]
    UnknownInteraction,
}

impl Rejection {
    /// HTTP status sent for this rejection.
    pub fn status(&self) -> StatusCode {
        match self {
            Rejection::MissingSignature | Rejection::InvalidSignature => StatusCode::UNAUTHORIZED,
            Rejection::MalformedPayload | Rejection::UnknownInteraction => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
