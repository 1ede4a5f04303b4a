//! Webhook endpoint handlers.
//!
//! Each handler decodes the form body, builds its reply, and returns. There
//! is no state behind these endpoints: nothing outlives the request, and the
//! health timestamp is computed fresh per call.

use axum::{body::Bytes, http::header::CONTENT_TYPE, http::HeaderMap, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::form::decode_form;
use crate::web::response::WebhookReply;
use crate::{twiml, WebhookError};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Twilio Webhook Server is running",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Raw `Content-Type` header value, empty when absent.
fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Twilio SMS webhook endpoint.
///
/// Replies with TwiML acknowledging the message. Missing `From`/`Body`
/// fields render as the literal `undefined`, matching the upstream server.
pub async fn sms_webhook(
    headers: HeaderMap,
    body: Bytes,
) -> Result<WebhookReply, WebhookError> {
    let fields = decode_form(Some(content_type(&headers)), &body)?;
    info!(
        from = fields.get("From").map(String::as_str).unwrap_or(""),
        body_length = fields.get("Body").map(String::len).unwrap_or(0),
        "sms_webhook_received"
    );

    Ok(WebhookReply::Xml(twiml::sms_reply(&fields)))
}

/// Twilio voice webhook endpoint.
///
/// Replies with a spoken TwiML script: greeting, one-second pause, goodbye.
pub async fn voice_webhook(
    headers: HeaderMap,
    body: Bytes,
) -> Result<WebhookReply, WebhookError> {
    let fields = decode_form(Some(content_type(&headers)), &body)?;
    info!(
        from = fields.get("From").map(String::as_str).unwrap_or(""),
        "voice_webhook_received"
    );

    Ok(WebhookReply::Xml(twiml::voice_reply(&fields)))
}

/// Generic webhook endpoint for testing.
///
/// Echoes the decoded fields and the raw content-type header back as JSON.
pub async fn test_webhook(
    headers: HeaderMap,
    body: Bytes,
) -> Result<WebhookReply, WebhookError> {
    let raw_content_type = content_type(&headers).to_string();
    let fields = decode_form(Some(raw_content_type.as_str()), &body)?;
    info!(
        field_count = fields.len(),
        content_type = %raw_content_type,
        "test_webhook_received"
    );

    Ok(WebhookReply::Json(json!({
        "success": true,
        "message": "Webhook received successfully",
        "receivedData": fields,
        "contentType": raw_content_type,
    })))
}
