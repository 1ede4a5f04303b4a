//! End-to-end tests for the webhook routes.
//!
//! Drives the router directly with `tower::ServiceExt::oneshot` and asserts
//! on status codes, content types, and response bodies.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use chrono::DateTime;
use serde_json::Value;
use tower::ServiceExt;

use twilio_webhook::{router, Config};

fn test_app() -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_ms: 8000,
    };
    router(&config)
}

fn form_post(path: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

#[tokio::test]
async fn health_check_reports_healthy_with_iso8601_timestamp() {
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "Twilio Webhook Server is running");

    let timestamp = body["timestamp"].as_str().expect("timestamp present");
    DateTime::parse_from_rfc3339(timestamp).expect("timestamp should be ISO-8601");
}

#[tokio::test]
async fn health_check_timestamps_do_not_decrease() {
    let app = test_app();

    let mut timestamps = Vec::new();
    for _ in 0..2 {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        let parsed = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
        timestamps.push(parsed);
    }

    assert!(timestamps[0] <= timestamps[1]);
}

#[tokio::test]
async fn sms_webhook_returns_twiml_acknowledgment() {
    let request = form_post(
        "/webhook/sms",
        "application/x-www-form-urlencoded",
        "From=%2B1234567890&Body=Hello%2C+this+is+a+test+message%21",
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/xml"
    );

    let body = body_string(response).await;
    assert!(body.contains(
        "Thank you for your message: \"Hello, this is a test message!\". \
         We received it from +1234567890."
    ));
}

#[tokio::test]
async fn voice_webhook_returns_spoken_twiml_script() {
    let request = form_post(
        "/webhook/voice",
        "application/x-www-form-urlencoded",
        "From=%2B1234567890&CallSid=CAtest123",
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/xml"
    );

    let body = body_string(response).await;
    let greeting = body
        .find("Hello! Thank you for calling from +1234567890. This is a test webhook response.")
        .expect("greeting present");
    let pause = body.find("<Pause length=\"1\"/>").expect("pause present");
    let goodbye = body.find("Goodbye!").expect("goodbye present");
    assert!(greeting < pause && pause < goodbye);
}

#[tokio::test]
async fn test_webhook_echoes_fields_and_content_type() {
    let raw_content_type = "application/x-www-form-urlencoded; charset=UTF-8";
    let request = form_post(
        "/webhook/test",
        raw_content_type,
        "MessageSid=SMtest123&From=%2B1234567890&Body=Hello&NumMedia=0",
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Webhook received successfully");
    assert_eq!(body["contentType"], raw_content_type);
    assert_eq!(body["receivedData"]["MessageSid"], "SMtest123");
    assert_eq!(body["receivedData"]["From"], "+1234567890");
    assert_eq!(body["receivedData"]["Body"], "Hello");
    assert_eq!(body["receivedData"]["NumMedia"], "0");
}

#[tokio::test]
async fn webhook_posts_with_json_content_type_return_415() {
    for path in ["/webhook/sms", "/webhook/voice", "/webhook/test"] {
        let request = form_post(path, "application/json", r#"{"From":"+1234567890"}"#);

        let response = test_app().oneshot(request).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected 415 for {path}"
        );

        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "Unsupported Media Type");
        assert_eq!(body["received"], "application/json");
    }
}

#[tokio::test]
async fn sms_webhook_without_expected_fields_renders_undefined() {
    let request = form_post(
        "/webhook/sms",
        "application/x-www-form-urlencoded",
        "MessageSid=SMtest123",
    );

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Thank you for your message: \"undefined\""));
    assert!(body.contains("We received it from undefined."));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let request = Request::builder()
        .method("GET")
        .uri("/nope")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_on_webhook_route_is_rejected() {
    let request = Request::builder()
        .method("GET")
        .uri("/webhook/sms")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
