//! TwiML response construction.
//!
//! TwiML is the XML dialect Twilio expects back from a webhook: a `<Response>`
//! root containing message or speech instructions. The strings built here are
//! complete documents including the XML declaration; the renderer sends them
//! verbatim.
//!
//! Field values are interpolated without XML escaping, matching the upstream
//! server byte for byte. A message body containing `<` or `&` therefore
//! produces malformed XML; fixing that is a product decision, not a rendering
//! detail.

use std::collections::HashMap;

/// Placeholder rendered when an expected field is absent from the payload.
///
/// Matches the upstream server's template interpolation of a missing value.
const MISSING_FIELD: &str = "undefined";

/// Look up a field, falling back to the literal `undefined` placeholder.
fn field_or_undefined<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map_or(MISSING_FIELD, String::as_str)
}

/// TwiML acknowledgment for an inbound SMS.
pub fn sms_reply(fields: &HashMap<String, String>) -> String {
    let from = field_or_undefined(fields, "From");
    let body = field_or_undefined(fields, "Body");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
  <Message>Thank you for your message: "{body}". We received it from {from}.</Message>
</Response>"#
    )
}

/// TwiML script for an inbound voice call: greeting, one-second pause,
/// goodbye.
pub fn voice_reply(fields: &HashMap<String, String>) -> String {
    let from = field_or_undefined(fields, "From");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
  <Say voice="alice">Hello! Thank you for calling from {from}. This is a test webhook response.</Say>
  <Pause length="1"/>
  <Say voice="alice">Goodbye!</Say>
</Response>"#
    )
}
