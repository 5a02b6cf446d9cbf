mod common;

use common::{client_for, unreachable_base_url, RecordingReporter};
use fittrack_client::{ClientConfig, ErrorExtraction, FailureKind, HttpClient};
use httpmock::prelude::*;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

#[tokio::test]
async fn test_every_verb_returns_success_body_unchanged() {
    let server = MockServer::start_async().await;
    let payload = json!({"id": 7, "tags": ["a", "b"], "nested": {"price": 29.99, "none": null}});

    // No method matcher: the same mock answers every verb.
    let mock = server
        .mock_async(|when, then| {
            when.path("/api/things/7");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(payload.clone());
        })
        .await;

    let (client, reporter) = client_for(&server, ClientConfig::default());

    assert_eq!(client.get("/things/7").await.unwrap(), payload);
    assert_eq!(client.post("/things/7", &json!({})).await.unwrap(), payload);
    assert_eq!(client.put("/things/7", &json!({"x": 1})).await.unwrap(), payload);
    assert_eq!(client.delete("/things/7").await.unwrap(), payload);
    assert_eq!(mock.hits_async().await, 4);
    assert!(reporter.calls().is_empty());
}

#[tokio::test]
async fn test_post_sends_json_content_type_and_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/echo")
                .header("content-type", "application/json")
                .json_body(json!({"a": 1}));
            then.status(201).json_body(json!({"ok": true}));
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());
    let value = client.post("/echo", &json!({"a": 1})).await.unwrap();

    assert_eq!(value, json!({"ok": true}));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_put_delete_without_reason_use_generic_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/missing");
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/missing");
            then.status(500).body("Internal Server Error");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/missing");
            then.status(403).json_body(json!({"detail": "nope"}));
        })
        .await;

    let (client, reporter) = client_for(&server, ClientConfig::default());

    let err = client.get("/missing").await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 404");
    assert_eq!(err.status, Some(404));
    assert_eq!(err.kind, FailureKind::HttpStatus);

    let err = client.put("/missing", &json!({})).await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 500");
    assert_eq!(err.status, Some(500));
    assert_eq!(err.details, json!({}));

    let err = client.delete("/missing").await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 403");
    assert_eq!(err.details, json!({"detail": "nope"}));
    assert!(!err.has_structured_message());

    assert_eq!(reporter.calls().len(), 3);
}

#[tokio::test]
async fn test_post_extracts_error_field() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/members");
            then.status(409).json_body(json!({"error": "X"}));
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());
    let err = client.post("/members", &json!({"email": "a@b.c"})).await.unwrap_err();

    assert_eq!(err.message, "X");
    assert_eq!(err.status, Some(409));
    assert_eq!(err.details, json!({"error": "X"}));
    assert!(err.has_structured_message());
}

#[tokio::test]
async fn test_post_falls_back_to_message_field() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/plans");
            then.status(400).json_body(json!({"message": "Y"}));
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());
    let err = client.post("/plans", &json!({})).await.unwrap_err();

    assert_eq!(err.message, "Y");
    assert_eq!(err.kind, FailureKind::StructuredHttpStatus);
}

#[tokio::test]
async fn test_post_with_unparseable_body_gets_generic_message_and_empty_details() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/classes");
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/plans");
            then.status(400);
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());

    let err = client.post("/classes", &json!({})).await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 502");
    assert_eq!(err.details, json!({}));

    let err = client.post("/plans", &json!({})).await.unwrap_err();
    assert_eq!(err.message, "HTTP error! status: 400");
    assert_eq!(err.details, json!({}));
}

#[tokio::test]
async fn test_all_verbs_extract_server_reason_by_default() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/members/9");
            then.status(404)
                .json_body(json!({"error": "NotFoundError", "message": "Member 9 not found"}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/members/9");
            then.status(403).json_body(json!({"message": "Admins only"}));
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());

    let err = client.get("/members/9").await.unwrap_err();
    assert_eq!(err.message, "NotFoundError");
    assert_eq!(err.details["message"], "Member 9 not found");
    assert!(err.has_structured_message());

    let err = client.delete("/members/9").await.unwrap_err();
    assert_eq!(err.message, "Admins only");
}

#[tokio::test]
async fn test_post_only_extraction_keeps_other_verbs_generic() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.path("/api/members/9");
            then.status(400).json_body(json!({"error": "Invalid email"}));
        })
        .await;

    let config = ClientConfig::default().with_error_extraction(ErrorExtraction::PostOnly);
    let (client, reporter) = client_for(&server, config);

    let post = client.post("/members/9", &json!({})).await.unwrap_err();
    assert_eq!(post.message, "Invalid email");
    assert_eq!(post.details, json!({"error": "Invalid email"}));

    for err in [
        client.get("/members/9").await.unwrap_err(),
        client.put("/members/9", &json!({})).await.unwrap_err(),
        client.delete("/members/9").await.unwrap_err(),
    ] {
        assert_eq!(err.message, "HTTP error! status: 400");
        assert_eq!(err.status, Some(400));
        assert_eq!(err.details, json!({}));
        assert!(!err.has_structured_message());
    }

    assert_eq!(reporter.calls().len(), 4);
}

#[tokio::test]
async fn test_each_failure_is_reported_once_and_still_returned() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/plans");
            then.status(500);
        })
        .await;

    let (client, reporter) = client_for(&server, ClientConfig::default());

    assert!(client.get("/plans").await.is_err());
    assert!(client.get("/plans").await.is_err());

    let calls = reporter.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "GET");
    assert_eq!(calls[0].1, server.url("/api/plans"));
    assert_eq!(calls[0].2, Some(500));
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
    let reporter = Arc::new(RecordingReporter::default());
    let client = HttpClient::new(ClientConfig::new(unreachable_base_url())).with_reporter(reporter.clone());

    let err = client.get("/members").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Transport);
    assert_eq!(err.status, None);
    assert_eq!(err.details, json!({}));
    assert!(!err.has_structured_message());
    assert_eq!(reporter.calls().len(), 1);
    assert_eq!(reporter.calls()[0].2, None);
}

#[tokio::test]
async fn test_non_json_success_body_is_a_decode_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/members");
            then.status(200).body("<!doctype html>");
        })
        .await;

    let (client, reporter) = client_for(&server, ClientConfig::default());
    let err = client.get("/members").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Decode);
    assert_eq!(err.status, Some(200));
    assert_eq!(reporter.calls().len(), 1);
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/classes/3");
            then.status(204);
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());
    assert_eq!(client.delete("/classes/3").await.unwrap(), serde_json::Value::Null);
}

#[tokio::test]
async fn test_put_sends_json_content_type_and_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/members/42")
                .header("content-type", "application/json")
                .json_body(json!({"status": "inactive"}));
            then.status(200).json_body(json!({"id": 42, "status": "inactive"}));
        })
        .await;

    let (client, _) = client_for(&server, ClientConfig::default());
    let value = client.put("/members/42", &json!({"status": "inactive"})).await.unwrap();

    assert_eq!(value["status"], "inactive");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unserializable_body_is_encode_failure_reported_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.path("/api/plans");
            then.status(201);
        })
        .await;

    let (client, reporter) = client_for(&server, ClientConfig::default());

    // JSON object keys must be strings; tuple keys cannot be serialized.
    let mut body: HashMap<(u8, u8), u8> = HashMap::new();
    body.insert((1, 2), 3);

    let err = client.post("/plans", &body).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Encode);
    assert_eq!(err.status, None);
    assert_eq!(err.details, json!({}));

    let err = client.put("/plans", &body).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Encode);

    let calls = reporter.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "POST");
    assert_eq!(calls[0].2, None);
    assert_eq!(mock.hits_async().await, 0);
}
