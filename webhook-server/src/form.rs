//! Form-encoded request body decoding.
//!
//! Twilio delivers webhook payloads as `application/x-www-form-urlencoded`
//! bodies, not JSON. This module normalizes the content type and decodes the
//! body into a flat field map. Decoding is a pure function of its inputs and
//! is total over byte input: invalid percent sequences decode lossily rather
//! than failing.

use std::collections::HashMap;

use url::form_urlencoded;

use crate::error::WebhookError;

/// The one media type the decoder accepts.
pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

/// Check whether a `Content-Type` header value is form-urlencoded.
///
/// Parameters after the media type (typically `charset=UTF-8`) are allowed
/// and ignored. Matching is case-insensitive per RFC 9110.
pub fn is_form_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim();
    media_type.eq_ignore_ascii_case(FORM_MEDIA_TYPE)
}

/// Decode a form-encoded request body into a field map.
///
/// Fails with `UnsupportedMediaType` when the content type is missing or not
/// form-urlencoded; the rejected header value is carried in the error so the
/// caller can echo it back. Duplicate keys resolve last-occurrence-wins.
pub fn decode_form(
    content_type: Option<&str>,
    body: &[u8],
) -> Result<HashMap<String, String>, WebhookError> {
    let content_type = content_type.unwrap_or("");
    if !is_form_content_type(content_type) {
        return Err(WebhookError::UnsupportedMediaType {
            received: content_type.to_string(),
        });
    }

    let mut fields = HashMap::new();
    for (key, value) in form_urlencoded::parse(body) {
        fields.insert(key.into_owned(), value.into_owned());
    }
    Ok(fields)
}
