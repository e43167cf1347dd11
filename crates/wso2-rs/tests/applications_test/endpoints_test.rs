use crate::common::{TEST_TOKEN, client_for, setup_client};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wso2_rs::Wso2Error;
use wso2_rs::applications::models::{ApplicationCredentials, GenerateKeysRequest};

#[tokio::test]
async fn test_create_application_and_generate_keys() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/api/am/devportal/v3/applications"))
        .and(bearer_token(TEST_TOKEN))
        .and(body_partial_json(json!({"name": "TestApp", "throttlingPolicy": "Unlimited"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "applicationId": "app-123",
            "name": "TestApp",
            "throttlingPolicy": "Unlimited",
            "status": "APPROVED"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/am/devportal/v3/applications/app-123/generate-keys"))
        .and(body_partial_json(json!({
            "keyType": "PRODUCTION",
            "keyManager": "WSO2-IS",
            "callbackUrl": "http://localhost:8080/callback"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keyMappingId": "km-1",
            "keyManager": "WSO2-IS",
            "consumerKey": "ck-abc",
            "consumerSecret": "cs-xyz",
            "supportedGrantTypes": ["client_credentials", "password"],
            "callbackUrl": "http://localhost:8080/callback",
            "keyState": "COMPLETED",
            "keyType": "PRODUCTION"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let app = client
        .create_application("TestApp", "Unlimited", "test application")
        .await
        .expect("create application");
    let grants = vec!["client_credentials".to_string(), "password".to_string()];
    let req = GenerateKeysRequest::production("WSO2-IS", &grants, Some("http://localhost:8080/callback"));
    let keys = client.generate_keys(&app.application_id, &req).await.expect("generate keys");
    let creds = ApplicationCredentials::new(&app, &keys);

    assert_eq!(creds.application_id, "app-123");
    assert_eq!(creds.client_id, "ck-abc");
    assert_eq!(creds.client_secret, "cs-xyz");
    assert_eq!(creds.callback_url.as_deref(), Some("http://localhost:8080/callback"));
}

#[tokio::test]
async fn test_generate_keys_without_consumer_key_is_missing_field() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/api/am/devportal/v3/applications/app-1/generate-keys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"keyState": "CREATED"})))
        .mount(&server)
        .await;

    let req = GenerateKeysRequest::production("WSO2-IS", &[], None);
    match client.generate_keys("app-1", &req).await {
        Err(Wso2Error::MissingField(f)) => assert_eq!(f, "consumerKey"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_get_delete_application() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/api/am/devportal/v3/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "list": [{"applicationId": "app-1", "name": "DefaultApplication"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/am/devportal/v3/applications/app-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "applicationId": "app-1", "name": "DefaultApplication"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/am/devportal/v3/applications/app-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let list = client.list_applications().await.unwrap();
    assert_eq!(list.count, 1);
    assert_eq!(list.list[0].name, "DefaultApplication");
    let app = client.get_application("app-1").await.unwrap();
    assert_eq!(app.application_id, "app-1");
    client.delete_application("app-1").await.unwrap();
}

#[tokio::test]
async fn test_management_call_without_token_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let result = client.list_applications().await;
    assert!(matches!(result, Err(Wso2Error::Other(msg)) if msg.contains("management token")));
}

#[tokio::test]
async fn test_unauthorized_surfaces_status() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/api/am/devportal/v3/applications/nope"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;
    let err = client.get_application("nope").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(!err.is_already_exists());
}
