// ABOUTME: Login operation tests
// ABOUTME: Pins the application header, grant body, and token mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use podium_client::resources::auth;
use podium_client::{Error, PodiumClient, PodiumConfig};

fn client_for(server: &MockServer) -> PodiumClient {
    let config = PodiumConfig::new("test_id", "test_secret").with_base_url(server.uri());
    PodiumClient::new(config).unwrap()
}

#[tokio::test]
async fn login_posts_the_password_grant_with_the_application_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("Authorization", "Basic test_id:test_secret"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=password&username=driver&password=hunter2",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "abc",
            "token_type": "bearer",
            "created_at": 1000,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let token = auth::login(&client, "driver", "hunter2").await.unwrap();
    assert_eq!(token.token, "abc");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.created, 1000);
}

#[tokio::test]
async fn rejected_credentials_surface_as_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_grant",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = auth::login(&client, "driver", "wrong").await.unwrap_err();
    assert!(matches!(error, Error::Failure { status: 401, .. }));
}
