use crate::common::{client_for, setup_client};
use serde_json::json;
use wiremock::matchers::{basic_auth, bearer_token, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wso2_rs::tokens::MANAGEMENT_SCOPES;
use wso2_rs::tokens::models::Grant;
use wso2_rs::{Target, Wso2Error};

#[tokio::test]
async fn test_password_grant() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(basic_auth("ck", "cs"))
        .and(body_string_contains("grant_type=password"))
        .and(body_string_contains("username=testuser"))
        .and(body_string_contains("scope=openid+profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "at-1",
            "refresh_token": "rt-1",
            "scope": "openid profile",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let grant = Grant::Password { username: "testuser".into(), password: "Passw0rd!".into() };
    let token = client
        .issue_token(Target::IdentityServer, "ck", "cs", &grant, &["openid", "profile"])
        .await
        .unwrap();
    assert_eq!(token.access_token, "at-1");
    assert_eq!(token.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(token.expires_in, 3600);
}

#[tokio::test]
async fn test_empty_access_token_is_missing_field() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": ""})))
        .mount(&server)
        .await;

    let err = client
        .issue_token(Target::IdentityServer, "ck", "cs", &Grant::ClientCredentials, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, Wso2Error::MissingField(ref f) if f == "access_token"));
}

#[tokio::test]
async fn test_invalid_client_is_http_error() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid_client", "error_description": "Client Authentication failed."
        })))
        .mount(&server)
        .await;

    let grant = Grant::RefreshToken { refresh_token: "rt".into() };
    let err = client
        .issue_token(Target::IdentityServer, "bad", "bad", &grant, &[])
        .await
        .unwrap_err();
    match err {
        Wso2Error::Http { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("invalid_client"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_authorize_management_registers_client_and_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/client-registration/v0.17/register"))
        .and(basic_auth("admin", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientId": "mgmt-ck",
            "clientSecret": "mgmt-cs",
            "clientName": "wso2ctl_management",
            "callBackURL": "www.localhost.com",
            "isSaasApplication": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(basic_auth("mgmt-ck", "mgmt-cs"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("apim%3Aapi_create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "mgmt-token", "token_type": "Bearer", "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/am/publisher/v4/apis"))
        .and(bearer_token("mgmt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0, "list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.authorize_management(MANAGEMENT_SCOPES).await.unwrap();
    assert_eq!(client.management_token(), Some("mgmt-token"));
    let apis = client.list_apis().await.unwrap();
    assert_eq!(apis.count, 0);
}

#[tokio::test]
async fn test_userinfo_uses_bearer() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/oauth2/userinfo"))
        .and(bearer_token("at-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sub": "testuser", "email": "t@x.io"})))
        .mount(&server)
        .await;

    let info = client.userinfo("at-1").await.unwrap();
    assert_eq!(info["sub"], "testuser");
}
