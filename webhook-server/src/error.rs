//! Error types for the webhook request pipeline.
//!
//! Every route threads `Result<_, WebhookError>` through decode → handle →
//! render, and this module is the single place where failures become wire
//! responses. Callers never see internal error details, only a uniform JSON
//! error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failure modes visible at a route boundary.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request body carried a content type the decoder does not support.
    #[error("unsupported media type: {received}")]
    UnsupportedMediaType {
        /// Raw `Content-Type` header value, empty when the header was absent.
        received: String,
    },

    /// Catch-all for unexpected failures inside a handler.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON body returned for unsupported media types.
#[derive(Serialize)]
struct UnsupportedMediaTypeBody {
    error: &'static str,
    message: &'static str,
    received: String,
}

/// JSON body returned for internal errors.
#[derive(Serialize)]
struct InternalErrorBody {
    error: &'static str,
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match self {
            WebhookError::UnsupportedMediaType { received } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(UnsupportedMediaTypeBody {
                    error: "Unsupported Media Type",
                    message: "This endpoint expects application/x-www-form-urlencoded content",
                    received,
                }),
            )
                .into_response(),
            WebhookError::Internal(err) => {
                error!(error = %err, "webhook_internal_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(InternalErrorBody {
                        error: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}
