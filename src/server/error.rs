use crate::core::attachment_host::HostError;
use crate::server::types::ErrorResponse;
use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can go wrong while relaying one upload. Each variant maps
/// to one HTTP status, with the Display text as the response's error field.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("File too large. Maximum size is 10MB.")]
    TooLarge,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Adapter(String),

    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    // The transport layer reports an exceeded body cap either as a 413 or as
    // a length-limit stream error inside the multipart parser. Both mean the
    // same thing to the caller: the file was too large.
    pub fn from_multipart(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Self::TooLarge;
        }

        let message = err.body_text();
        if message.contains("length limit") {
            Self::TooLarge
        } else {
            Self::Unexpected(message)
        }
    }
}

impl From<HostError> for RelayError {
    fn from(err: HostError) -> Self {
        Self::Adapter(err.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::TooLarge | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Adapter(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Upload error: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
