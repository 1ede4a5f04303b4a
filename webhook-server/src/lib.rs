//! Twilio webhook server library.
//!
//! A stateless HTTP server that answers a telephony provider's inbound SMS
//! and voice callbacks with fixed-format TwiML, plus a JSON health check and
//! an echo endpoint for manual testing.
//!
//! ## Request pipeline
//!
//! ```text
//! POST body → form::decode_form → handler → WebhookReply → wire
//!                    ↘ WebhookError (415/500 JSON) ↗
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod twiml;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::WebhookError;
pub use web::{router, WebhookReply};
