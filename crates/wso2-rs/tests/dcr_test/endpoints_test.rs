use crate::common::setup_client;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};
use wso2_rs::Wso2Error;

#[tokio::test]
async fn test_register_management_client() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/client-registration/v0.17/register"))
        .and(basic_auth("admin", "admin"))
        .and(body_partial_json(json!({
            "clientName": "ops",
            "owner": "admin",
            "grantType": "password refresh_token",
            "saasApp": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientId": "dcr-ck",
            "clientSecret": "dcr-cs",
            "clientName": "admin_ops",
            "callBackURL": "www.localhost.com"
        })))
        .mount(&server)
        .await;

    let dcr = client.register_management_client("ops", &["password", "refresh_token"]).await.unwrap();
    assert_eq!(dcr.client_id, "dcr-ck");
    assert_eq!(dcr.client_secret, "dcr-cs");
}

#[tokio::test]
async fn test_register_without_secret_is_missing_field() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/client-registration/v0.17/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clientId": "dcr-ck",
            "clientSecret": ""
        })))
        .mount(&server)
        .await;

    let err = client.register_management_client("ops", &["password"]).await.unwrap_err();
    assert!(matches!(err, Wso2Error::MissingField(ref f) if f == "clientSecret"));
}
