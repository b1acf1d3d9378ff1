//! Tests for the HTTP user source against a mock server.

use serde_json::json;
use usercache_core::{ApiClient, ApiError, UserSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn leanne_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": { "name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net" }
    })
}

#[tokio::test]
async fn test_fetch_all_decodes_user_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([leanne_json()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let users = client.fetch_all().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "Leanne Graham");
    assert_eq!(users[0].company_name(), Some("Romaguera-Crona"));
    assert_eq!(users[0].city(), Some("Gwenborough"));
}

#[tokio::test]
async fn test_fetch_by_id_hits_user_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leanne_json()))
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri())).unwrap();
    let user = client.fetch_by_id(1).await.unwrap();
    assert_eq!(user.email, "Sincere@april.biz");
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    let err = client.fetch_by_id(99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    match client.fetch_all().await.unwrap_err() {
        ApiError::ServerError(body) => assert_eq!(body, "maintenance"),
        other => panic!("Expected ServerError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>captive portal</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).unwrap();
    assert!(matches!(client.fetch_all().await, Err(ApiError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Nothing listens on the discard port
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    assert!(matches!(client.fetch_all().await, Err(ApiError::Network(_))));
}
