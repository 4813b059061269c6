//! Contract tests for transport, response classification, and decoding,
//! exercised end to end against a mock API server.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use unione_client::{Client, EmailMessage, EmailRecipient, Error, OperationStatus, Pagination};

const API_PREFIX: &str = "/en/transactional/api/v1";
const TIMEOUT_STATUS: &str = "Request cancelled due to timeout.";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key("test-key")
        .server_address(server.base_url())
        .build()
        .unwrap()
}

fn single_recipient_message() -> EmailMessage {
    EmailMessage {
        recipients: vec![EmailRecipient::new("user@example.com").unwrap()],
        ..Default::default()
    }
}

#[tokio::test]
async fn every_request_carries_the_api_key_header() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{API_PREFIX}/system/info.json"))
                .header("X-API-KEY", "test-key")
                .header("content-type", "application/json");
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let client = client_for(&server);
    let info = client.system().info().await.unwrap();

    mock.assert_async().await;
    assert_eq!(info.status.as_deref(), Some("success"));
}

#[tokio::test]
async fn minimal_success_envelope_decodes_cleanly() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{API_PREFIX}/email/send.json"))
                .json_body(json!({
                    "message": {"recipients": [{"email": "user@example.com"}]}
                }));
            then.status(200)
                .body(r#"{"status":"success","status_code":0,"message":"sent"}"#);
        })
        .await;

    let client = client_for(&server);
    let sent = client.email().send(single_recipient_message()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(sent.status.as_deref(), Some("success"));
    assert!(sent.job_id.is_none());
    assert!(sent.emails.is_empty());
}

#[tokio::test]
async fn rejected_calls_surface_the_platform_error_code() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/domain/list.json"));
            then.status(400).json_body(json!({
                "status": "error",
                "error": {"code": 401, "message": "invalid key"}
            }));
        })
        .await;

    let client = client_for(&server);
    let err = client
        .domain()
        .list("example.com", Pagination::default())
        .await
        .unwrap_err();

    let api = err.as_api().expect("should be an API error");
    assert_eq!(api.status, "BadRequest");
    assert_eq!(api.code(), Some(401));
    let details = api.details.as_ref().unwrap();
    assert_eq!(details.status, "error");
    assert_eq!(details.message, "invalid key");
}

#[tokio::test]
async fn slow_responses_become_the_synthetic_timeout_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/tag/list.json"));
            then.status(200)
                .body("<<<never seen by the client>>>")
                .delay(Duration::from_secs(5));
        })
        .await;

    let client = Client::builder()
        .api_key("test-key")
        .server_address(server.base_url())
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();

    let err = client.tag().list().await.unwrap_err();

    let api = err.as_api().expect("should be an API error");
    assert!(api.is_timeout());
    assert_eq!(api.status, TIMEOUT_STATUS);
    let details = api.details.as_ref().unwrap();
    assert_eq!(details.status, "TIMEOUT");
    assert_eq!(details.code, 0);
    assert_eq!(details.message, TIMEOUT_STATUS);
}

#[tokio::test]
async fn raw_json_bodies_pass_through_verbatim() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{API_PREFIX}/future/endpoint.json"))
                .body(r#"{"a":1}"#);
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let client = client_for(&server);
    let reply: OperationStatus = client
        .generic()
        .custom_request_raw("future/endpoint.json", r#"{"a":1}"#)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(reply.is_success());
}

#[tokio::test]
async fn plain_text_bodies_are_sent_as_one_json_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{API_PREFIX}/future/endpoint.json"))
                .body(r#""plain text""#);
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let client = client_for(&server);
    let reply: OperationStatus = client
        .generic()
        .custom_request_raw("future/endpoint.json", "plain text")
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(reply.is_success());
}

#[tokio::test]
async fn typed_generic_requests_are_serialized_once() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(format!("{API_PREFIX}/future/endpoint.json"))
                .json_body(json!({"limit": 5}));
            then.status(200).json_body(json!({"status": "success"}));
        })
        .await;

    let client = client_for(&server);
    let reply: serde_json::Value = client
        .generic()
        .custom_request("future/endpoint.json", &json!({"limit": 5}))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(reply["status"], "success");
}

#[tokio::test]
async fn non_json_success_bodies_are_malformed_not_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/system/info.json"));
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.system().info().await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn shape_mismatched_success_bodies_are_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/system/info.json"));
            then.status(200).json_body(json!([1, 2, 3]));
        })
        .await;

    let client = client_for(&server);
    let err = client.system().info().await.unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { .. }));
}

#[tokio::test]
async fn error_statuses_with_empty_bodies_have_no_details() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/tag/list.json"));
            then.status(500);
        })
        .await;

    let client = client_for(&server);
    let err = client.tag().list().await.unwrap_err();

    let api = err.as_api().expect("should be an API error");
    assert_eq!(api.status, "InternalServerError");
    assert!(api.details.is_none());
    assert!(!api.is_timeout());
}

#[tokio::test]
async fn success_discriminant_overrides_the_error_substring() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(format!("{API_PREFIX}/system/info.json"));
            then.status(200)
                .json_body(json!({"status": "success", "email": "errors@example.com"}));
        })
        .await;

    let client = client_for(&server);
    let info = client.system().info().await.unwrap();

    assert_eq!(info.email.as_deref(), Some("errors@example.com"));
}
