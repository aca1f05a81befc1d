//! Integration tests for `SitecoreClient` using wiremock HTTP mocks.

use locfetch_core::{AppConfig, Environment, FieldUpdate};
use locfetch_sitecore::{SitecoreClient, SitecoreError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("addr"),
        log_level: "debug".to_string(),
        sitecore_client_id: "test-client".to_string(),
        sitecore_client_secret: "test-secret".to_string(),
        sitecore_graphql_endpoint: format!("{}/graphql", server.uri()),
        sitecore_token_url: format!("{}/oauth/token", server.uri()),
        sitecore_audience: "https://api.sitecorecloud.io".to_string(),
        http_timeout_secs: 5,
        user_agent: "locfetch-test/0.1".to_string(),
    }
}

fn test_client(server: &MockServer) -> SitecoreClient {
    SitecoreClient::from_config(&test_config(server)).expect("client construction should not fail")
}

fn title_update(value: Option<&str>) -> FieldUpdate {
    FieldUpdate {
        item_id: "item-123".to_string(),
        field_name: "title".to_string(),
        field_value: value.map(str::to_owned),
    }
}

async fn mount_token(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn update_field_returns_parsed_graphql_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client"))
        .and(body_string_contains("client_secret=test-secret"))
        .and(body_string_contains("audience=https%3A%2F%2Fapi.sitecorecloud.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-abc",
            "token_type": "Bearer",
            "expires_in": 86400
        })))
        .expect(1)
        .mount(&server)
        .await;

    let graphql_body = json!({
        "data": { "updateItem": { "item": { "itemId": "item-123", "name": "Home" } } }
    });
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer tok-abc"))
        .and(body_partial_json(json!({
            "variables": { "input": {
                "database": "master",
                "language": "en",
                "itemId": "item-123",
                "fields": [{ "name": "title", "value": "Dallas" }]
            } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&graphql_body))
        .expect(1)
        .mount(&server)
        .await;

    let data = test_client(&server)
        .update_field(&title_update(Some("Dallas")))
        .await
        .expect("update should succeed");

    assert_eq!(data, graphql_body);
}

#[tokio::test]
async fn token_failure_skips_graphql_call() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("token failure should propagate");

    assert!(
        matches!(err, SitecoreError::TokenStatus { status: 401 }),
        "expected TokenStatus(401), got: {err:?}"
    );
    assert_eq!(err.to_string(), "Token request failed with status 401");
}

#[tokio::test]
async fn missing_access_token_is_an_explicit_error() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "token_type": "Bearer" })).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("missing token should fail");

    assert!(matches!(err, SitecoreError::TokenMissing), "got: {err:?}");
}

#[tokio::test]
async fn graphql_status_error_carries_raw_body() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "access_token": "tok" })).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>forbidden</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("403 should fail");

    match err {
        SitecoreError::GraphqlStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "<html>forbidden</html>");
        }
        other => panic!("expected GraphqlStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "access_token": "tok" })).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("non-JSON should fail");

    assert!(
        matches!(err, SitecoreError::MalformedResponse { .. }),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn graphql_errors_fail_despite_http_success() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "access_token": "tok" })).await;
    let errors = json!([{ "message": "Field 'title' not found" }]);
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": null, "errors": errors })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("errors field should fail");

    match err {
        SitecoreError::GraphqlErrors(found) => assert_eq!(found, errors),
        other => panic!("expected GraphqlErrors, got: {other:?}"),
    }
}

#[tokio::test]
async fn null_errors_field_is_success() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "access_token": "tok" })).await;
    let body = json!({
        "data": { "updateItem": { "item": { "itemId": "item-123" } } },
        "errors": null
    });
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let data = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect("null errors should not fail");

    assert_eq!(data, body);
}

#[tokio::test]
async fn non_object_success_body_is_rejected() {
    let server = MockServer::start().await;
    mount_token(&server, json!({ "access_token": "tok" })).await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .update_field(&title_update(Some("x")))
        .await
        .expect_err("a null body should fail");

    assert!(matches!(err, SitecoreError::UnexpectedBody), "got: {err:?}");
}
