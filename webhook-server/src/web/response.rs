//! Wire rendering for handler results.
//!
//! A handler produces exactly one [`WebhookReply`]; this module turns it into
//! response bytes and a content type. The renderer trusts the handler's
//! output completely, no validation happens here.

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Result of a webhook handler, tagged by wire format.
#[derive(Debug)]
pub enum WebhookReply {
    /// A complete XML document, sent verbatim as `application/xml`.
    Xml(String),
    /// A JSON value, serialized as `application/json`.
    Json(Value),
}

impl IntoResponse for WebhookReply {
    fn into_response(self) -> Response {
        match self {
            WebhookReply::Xml(body) => {
                ([(CONTENT_TYPE, "application/xml")], body).into_response()
            }
            WebhookReply::Json(value) => Json(value).into_response(),
        }
    }
}
