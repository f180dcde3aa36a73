//! Browser session behaviour against a mock driver.

use std::time::Duration;

use base64::Engine;
use hats_domains::browser::{driver_ready, Browser, BrowserError, WebDriverSession};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SESSION: &str = "6f4b0c2e-hats";

async fn driver_with_session() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_partial_json(json!({
            "capabilities": { "alwaysMatch": { "browserName": "firefox" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "sessionId": SESSION, "capabilities": {} }
        })))
        .mount(&server)
        .await;
    server
}

async fn start(server: &MockServer) -> WebDriverSession {
    WebDriverSession::start(&server.uri(), Duration::from_secs(30))
        .await
        .expect("session should start")
}

#[tokio::test]
async fn test_new_session_sends_page_load_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_partial_json(json!({
            "capabilities": {
                "alwaysMatch": {
                    "browserName": "firefox",
                    "moz:firefoxOptions": { "args": ["-headless"] },
                    "timeouts": { "pageLoad": 12000 }
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "sessionId": SESSION, "capabilities": {} }
        })))
        .expect(1)
        .mount(&server)
        .await;

    WebDriverSession::start(&server.uri(), Duration::from_secs(12))
        .await
        .expect("capabilities should match");
}

#[tokio::test]
async fn test_session_lifecycle() {
    let server = driver_with_session().await;
    let png = vec![0x89, b'P', b'N', b'G', 1, 2, 3];
    let encoded = base64::engine::general_purpose::STANDARD.encode(&png);

    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .and(body_partial_json(json!({ "url": "http://2hats.com/" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/title")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": "Two Hats" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/session/{SESSION}/screenshot")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": encoded })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/session/{SESSION}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": null })))
        .expect(1..)
        .mount(&server)
        .await;

    let mut session = start(&server).await;
    session.navigate("http://2hats.com/").await.unwrap();
    assert_eq!(session.title().await.unwrap(), "Two Hats");
    assert_eq!(session.screenshot().await.unwrap(), png);
    session.quit().await.unwrap();
}

#[tokio::test]
async fn test_navigation_error_is_a_command_error() {
    let server = driver_with_session().await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "value": {
                "error": "unknown error",
                "message": "Reached error page: about:neterror?e=dnsNotFound",
                "stacktrace": ""
            }
        })))
        .mount(&server)
        .await;

    let mut session = start(&server).await;
    let err = session.navigate("http://16hats.com/").await.unwrap_err();
    assert!(matches!(err, BrowserError::Command(_)), "{err:?}");
}

#[tokio::test]
async fn test_page_load_timeout_is_a_command_error() {
    let server = driver_with_session().await;
    Mock::given(method("POST"))
        .and(path(format!("/session/{SESSION}/url")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "value": {
                "error": "timeout",
                "message": "Navigation timed out after 30000 ms",
                "stacktrace": ""
            }
        })))
        .mount(&server)
        .await;

    let mut session = start(&server).await;
    assert!(matches!(
        session.navigate("http://9hats.com/").await,
        Err(BrowserError::Command(_))
    ));
}

#[tokio::test]
async fn test_session_not_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "value": {
                "error": "session not created",
                "message": "Unable to find a matching set of capabilities",
                "stacktrace": ""
            }
        })))
        .mount(&server)
        .await;

    let result = WebDriverSession::start(&server.uri(), Duration::from_secs(30)).await;
    assert!(matches!(result, Err(BrowserError::Session(_))));
}

#[tokio::test]
async fn test_driver_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "ready": true, "message": "" }
        })))
        .mount(&server)
        .await;

    let client = reqwest::Client::new();
    assert!(driver_ready(&client, &server.uri()).await);
    assert!(!driver_ready(&client, "http://127.0.0.1:1").await);
}

#[tokio::test]
async fn test_driver_busy_is_not_ready() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": { "ready": false, "message": "Session already started" }
        })))
        .mount(&server)
        .await;

    assert!(!driver_ready(&reqwest::Client::new(), &server.uri()).await);
}
