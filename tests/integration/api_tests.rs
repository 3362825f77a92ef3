/// Tests for the HTTP client's envelope decoding and error typing
use habitica_mcp::{ApiError, Config, HabiticaClient};
use serde_json::json;

fn client_for(base_url: &str) -> HabiticaClient {
    let mut config = Config::new("test-user", "test-token");
    config.api_base = base_url.to_string();
    HabiticaClient::new(&config).expect("failed to build client")
}

#[tokio::test]
async fn success_returns_the_full_envelope() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("GET", "/tags")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "data": [] }).to_string())
        .create_async()
        .await;

    let client = client_for(&habitica.url());
    let envelope = client.get("/tags").await.expect("request should succeed");

    assert_eq!(envelope["success"], true);
    mock.assert_async().await;
}

#[tokio::test]
async fn auth_headers_are_sent_on_every_request() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("GET", "/user")
        .match_header("x-api-user", "test-user")
        .match_header("x-api-key", "test-token")
        .match_header("x-client", "test-user-habitica-mcp-server")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "data": {} }).to_string())
        .create_async()
        .await;

    let client = client_for(&habitica.url());
    client.get("/user").await.expect("request should succeed");
    mock.assert_async().await;
}

#[tokio::test]
async fn vendor_errors_are_structured() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("POST", "/user/buy/potion")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "error": "messageNotEnoughGold",
                "message": "Not enough gold."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&habitica.url());
    let err = client.post("/user/buy/potion").await.unwrap_err();

    match err {
        ApiError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("messageNotEnoughGold"));
            assert_eq!(message, "Not enough gold.");
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_bodies_fall_back_to_the_status_reason() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("GET", "/user")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let client = client_for(&habitica.url());
    let err = client.get("/user").await.unwrap_err();

    match err {
        ApiError::Api { status, code, .. } => {
            assert_eq!(status, 503);
            assert_eq!(code, None);
        }
        other => panic!("expected ApiError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_bodies_are_json_errors() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("GET", "/user")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;

    let client = client_for(&habitica.url());
    let err = client.get("/user").await.unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}
