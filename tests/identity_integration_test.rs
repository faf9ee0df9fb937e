//! End-to-end user management against a mock token endpoint and identity API.

use firebase_init::{
    try_initialize, AppRegistry, AuthError, Config, IdentityClient, UserService,
};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::path::Path;
use std::sync::Arc;

fn config_for(server: &ServerGuard) -> Config {
    let mut config = Config::with_credential_path(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/service_account.json"),
    );
    config.auth.base_url = server.url();
    config.auth.token_uri = Some(format!("{}/token", server.url()));
    config.retry.max_retries = 2;
    config.retry.initial_backoff_ms = 1;
    config.retry.max_backoff_ms = 5;
    config
}

fn service_for(config: &Config) -> UserService {
    let registry = AppRegistry::new();
    let app = try_initialize(config, &registry).unwrap();
    let client = IdentityClient::for_app(&app, config).unwrap();
    assert_eq!(client.project_id(), "demo-project");
    UserService::new(Arc::new(client))
}

async fn token_mock(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/token")
        .match_body(Matcher::Regex("assertion=".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"ya29.integration","expires_in":3600,"token_type":"Bearer"}"#)
        .expect(hits)
        .create_async()
        .await
}

#[tokio::test]
async fn test_create_then_delete_user() {
    let mut server = Server::new_async().await;
    let token = token_mock(&mut server, 1).await;

    let signup = server
        .mock("POST", "/v1/projects/demo-project/accounts")
        .match_header("authorization", "Bearer ya29.integration")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "email": "ada@example.com",
            "password": "correct-horse"
        })))
        .with_status(200)
        .with_body(r#"{"localId":"uid-ada","email":"ada@example.com"}"#)
        .create_async()
        .await;

    let lookup = server
        .mock("POST", "/v1/projects/demo-project/accounts:lookup")
        .match_body(Matcher::Json(serde_json::json!({ "email": ["ada@example.com"] })))
        .with_status(200)
        .with_body(r#"{"users":[{"localId":"uid-ada","email":"ada@example.com","createdAt":"1700000000000"}]}"#)
        .create_async()
        .await;

    let delete = server
        .mock("POST", "/v1/projects/demo-project/accounts:delete")
        .match_body(Matcher::Json(serde_json::json!({ "localId": "uid-ada" })))
        .with_status(200)
        .with_body(r#"{"kind":"identitytoolkit#DeleteAccountResponse"}"#)
        .create_async()
        .await;

    let config = config_for(&server);
    let service = service_for(&config);

    let created = service
        .create_user("ada@example.com", "correct-horse")
        .await
        .unwrap();
    assert_eq!(created.uid, "uid-ada");

    let deleted = service.delete_user("ada@example.com").await.unwrap();
    assert_eq!(deleted.uid, "uid-ada");

    // One token exchange serves all three calls
    token.assert_async().await;
    signup.assert_async().await;
    lookup.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_sign_in_unknown_user() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server, 1).await;
    let _lookup = server
        .mock("POST", "/v1/projects/demo-project/accounts:lookup")
        .with_status(200)
        .with_body(r#"{"kind":"identitytoolkit#GetAccountInfoResponse"}"#)
        .create_async()
        .await;

    let config = config_for(&server);
    let err = service_for(&config)
        .sign_in_user("ghost@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound(ref email) if email == "ghost@example.com"));
}

#[tokio::test]
async fn test_server_errors_are_retried() {
    let mut server = Server::new_async().await;
    let _token = token_mock(&mut server, 1).await;
    let failing = server
        .mock("POST", "/v1/projects/demo-project/accounts:lookup")
        .with_status(503)
        .with_body("backend unavailable")
        .expect(3)
        .create_async()
        .await;

    let config = config_for(&server);
    let err = service_for(&config)
        .get_user_by_email("ada@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::ServerError { status: 503, .. }));
    failing.assert_async().await;
}

#[tokio::test]
async fn test_rejected_token_exchange() {
    let mut server = Server::new_async().await;
    let _token = server
        .mock("POST", "/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant","error_description":"Invalid JWT Signature."}"#)
        .create_async()
        .await;

    let config = config_for(&server);
    let err = service_for(&config)
        .get_user_by_email("ada@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::TokenExchange { status: 400, ref body } if body.contains("invalid_grant")));
}
