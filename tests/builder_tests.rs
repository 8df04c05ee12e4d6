use std::time::Duration;

use cakemail_client::{CakeMailClient, CakeMailError, Parameters, DEFAULT_BASE_URL};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_config_error() {
    // What it tests: Builder-time validation of required/structured fields. It covers:
    // (1) a base URL that fails to parse, and (2) a missing API key.
    //
    // Why it's valuable: Fails fast before any network I/O, producing specific
    // ConfigurationError messages that make misconfiguration obvious to callers.
    let err = CakeMailClient::builder()
        .api_key("key")
        .base_url("invalid-url")
        .build()
        .unwrap_err();
    match err {
        CakeMailError::ConfigurationError(msg) => assert!(msg.contains("Invalid base URL")),
        other => panic!("Expected ConfigurationError for invalid URL, got {other:?}"),
    }

    let err = CakeMailClient::builder()
        .base_url("mailto:someone@example.com")
        .api_key("key")
        .build()
        .unwrap_err();
    assert!(matches!(err, CakeMailError::ConfigurationError(_)));

    let err = CakeMailClient::builder().build().unwrap_err();
    match err {
        CakeMailError::ConfigurationError(msg) => assert_eq!(msg, "API key is required"),
        other => panic!("Expected ConfigurationError for missing key, got {other:?}"),
    }
}

#[test]
fn test_builder_rejects_blank_api_key() {
    for key in ["", "   "] {
        match CakeMailClient::builder().api_key(key).build() {
            Err(CakeMailError::ConfigurationError(msg)) => assert_eq!(msg, "API key is required"),
            other => panic!("Expected ConfigurationError for {key:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_builder_rejects_api_key_unfit_for_header() {
    // What it tests: A key that cannot travel as an HTTP header value is refused at build time.
    //
    // Why it's valuable: Otherwise the client builds fine and then fails every single request.
    for key in ["abc\ndef", "key\r\nx-injected: 1", "tab\u{7f}"] {
        match CakeMailClient::builder().api_key(key).build() {
            Err(CakeMailError::ConfigurationError(msg)) => assert!(msg.contains("Invalid API key")),
            other => panic!("Expected ConfigurationError for {key:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_builder_missing_env_var() {
    let result = CakeMailClient::builder().api_key_from_env("CAKEMAIL_TEST_KEY_THAT_IS_NEVER_SET");
    assert!(matches!(result, Err(CakeMailError::ConfigurationError(_))));
}

#[test]
fn test_builder_defaults_and_base_path() {
    let client = CakeMailClient::builder()
        .api_key("key")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);

    let client = CakeMailClient::builder()
        .api_key("key")
        .base_url("https://proxy.example.com/cakemail")
        .build()
        .unwrap();
    assert_eq!(client.base_url().as_str(), "https://proxy.example.com/cakemail/");
}

#[test]
fn test_debug_does_not_leak_api_key() {
    let client = CakeMailClient::builder()
        .api_key("super-secret-key")
        .build()
        .unwrap();
    let printed = format!("{client:?}");
    assert!(!printed.contains("super-secret-key"));
    assert!(printed.contains("[REDACTED]"));
}

#[tokio::test]
async fn test_invalid_endpoint_rejected() {
    // What it tests: The client rejects endpoints containing a query string or fragment and
    // surfaces InvalidEndpoint without sending anything.
    //
    // Why it's valuable: Parameters belong in the form body; a query string would be silently
    // ignored by CakeMail and produce confusing errors. An absolute URL would send the API key
    // to whatever host it names.
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": 1
        })))
        .mount(&other_server)
        .await;

    let client = CakeMailClient::builder()
        .api_key("secret-key")
        .base_url(format!("{}/cakemail", mock_server.uri()))
        .build()
        .unwrap();

    let endpoints = [
        "Relay/Send?user_key=abc".to_string(),
        "List/GetInfo#top".to_string(),
        String::new(),
        format!("{}/Relay/Send", other_server.uri()),
        "https://other.example.com/Relay/Send".to_string(),
        "../Relay/Send".to_string(),
        "/../../Relay/Send".to_string(),
        "%2e%2e/Relay/Send".to_string(),
    ];
    for endpoint in &endpoints {
        match client.raw_request(endpoint, &Parameters::new()).await {
            Err(CakeMailError::InvalidEndpoint(_)) => {}
            other => panic!("expected InvalidEndpoint for {endpoint:?}, got {other:?}"),
        }
    }

    for server in [&mock_server, &other_server] {
        let requests = server
            .received_requests()
            .await
            .expect("failed to read recorded requests");
        assert!(requests.is_empty());
    }
}

#[tokio::test]
async fn test_endpoint_resolves_under_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/cakemail/List/Delete"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CakeMailClient::builder()
        .api_key("key")
        .base_url(format!("{}/cakemail", mock_server.uri()))
        .build()
        .unwrap();

    let data = client.raw_request("/List/Delete", &Parameters::new()).await.unwrap();
    assert_eq!(data, json!(true));
}

#[tokio::test]
async fn test_raw_request_returns_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/User/GetInfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "data": { "id": 5, "email": "owner@example.com" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CakeMailClient::builder()
        .api_key("key")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let mut params = Parameters::new();
    params.push("user_key", "user-123");
    let data = client.raw_request("/User/GetInfo", &params).await.unwrap();
    assert_eq!(data["email"], "owner@example.com");
}
