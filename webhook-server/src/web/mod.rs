//! Web server module for handling inbound webhooks.
//!
//! Receives Twilio-style webhook callbacks, decodes their form-encoded
//! bodies, and answers with TwiML or JSON. Unknown routes fall through to
//! axum's defaults (404, or 405 for a known path with the wrong method).

pub mod handlers;
pub mod response;

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::Config;

pub use handlers::{health, sms_webhook, test_webhook, voice_webhook, HealthResponse};
pub use response::WebhookReply;

/// Build the application router.
///
/// The configuration drives the per-request timeout; the routes themselves
/// are fixed.
pub fn router(config: &Config) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/webhook/sms", post(sms_webhook))
        .route("/webhook/voice", post(voice_webhook))
        .route("/webhook/test", post(test_webhook))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_millis(
            config.request_timeout_ms,
        )))
}
