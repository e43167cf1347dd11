use crate::common::setup_client;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use wso2_rs::Wso2Error;

#[tokio::test]
async fn test_create_role_conflict() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/scim2/Roles"))
        .and(body_partial_json(json!({"displayName": "forex_trader"})))
        .respond_with(ResponseTemplate::new(409).set_body_string("Role already exists"))
        .mount(&server)
        .await;

    let err = client.create_role("forex_trader", &[]).await.unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_find_role_and_assign_user() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Roles"))
        .and(query_param("filter", "displayName eq forex_trader"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalResults": 1,
            "Resources": [{"id": "r-7", "displayName": "forex_trader"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/scim2/Roles/r-7"))
        .and(body_partial_json(json!({
            "Operations": [{"op": "add", "path": "users", "value": [{"value": "u-1"}]}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let role_id = client.find_role_id("forex_trader").await.unwrap();
    assert_eq!(role_id, "r-7");
    client.assign_user_to_role(&role_id, "u-1").await.unwrap();
}

#[tokio::test]
async fn test_unknown_role_is_missing_field() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalResults": 0, "Resources": []})))
        .mount(&server)
        .await;

    let err = client.find_role_id("nobody").await.unwrap_err();
    assert!(matches!(err, Wso2Error::MissingField(_)));
}
