use crate::common::setup_client;
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};
use wso2_rs::Wso2Error;
use wso2_rs::users::models::{NewUser, ProfileUpdate};

fn testuser() -> NewUser {
    NewUser {
        username: "testuser".into(),
        password: "Passw0rd!".into(),
        email: "testuser@example.com".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_register_user() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/scim2/Users"))
        .and(basic_auth("admin", "admin"))
        .and(body_partial_json(json!({"userName": "testuser", "active": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "u-1",
            "userName": "testuser",
            "emails": ["testuser@example.com"],
            "active": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.register_user(&testuser()).await.unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.primary_email().as_deref(), Some("testuser@example.com"));
}

#[tokio::test]
async fn test_register_existing_user_is_already_exists() {
    let (server, client) = setup_client().await;
    Mock::given(method("POST"))
        .and(path("/scim2/Users"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:Error"],
            "detail": "User with the name: testuser already exists in the system.",
            "status": "409"
        })))
        .mount(&server)
        .await;

    let err = client.register_user(&testuser()).await.unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_get_user_by_id() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Users/u-1"))
        .and(basic_auth("admin", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1",
            "userName": "testuser",
            "active": true,
            "roles": [{"value": "r-1", "display": "api_consumer"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client.get_user("u-1").await.unwrap();
    assert_eq!(user.user_name, "testuser");
    assert_eq!(user.roles[0].display.as_deref(), Some("api_consumer"));
}

#[tokio::test]
async fn test_get_user_unexpected_payload_is_parse_error() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Users/u-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client.get_user("u-2").await.unwrap_err();
    assert!(matches!(err, Wso2Error::ParseError(_)));
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_find_user_by_username() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Users"))
        .and(query_param("filter", "userName eq testuser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalResults": 1,
            "Resources": [{"id": "u-1", "userName": "testuser", "active": false}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/scim2/Users"))
        .and(query_param("filter", "userName eq ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalResults": 0})))
        .mount(&server)
        .await;

    let user = client.require_user("testuser").await.unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.active, Some(false));
    assert!(client.find_user("ghost").await.unwrap().is_none());
    assert!(client.require_user("ghost").await.is_err());
}

#[tokio::test]
async fn test_activate_and_reset_password_patch_bodies() {
    let (server, client) = setup_client().await;
    Mock::given(method("PATCH"))
        .and(path("/scim2/Users/u-1"))
        .and(body_json(json!({
            "schemas": ["urn:ietf:params:scim:api:messages:2.0:PatchOp"],
            "Operations": [{"op": "replace", "value": {"active": true}}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/scim2/Users/u-1"))
        .and(body_partial_json(json!({
            "Operations": [{"op": "replace", "value": {"password": "N3wPass!", "active": true}}]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.set_user_active("u-1", true).await.unwrap();
    client.reset_password("u-1", "N3wPass!").await.unwrap();
}

#[tokio::test]
async fn test_update_profile_skips_request_when_empty() {
    let (server, client) = setup_client().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let updated = client.update_profile("u-1", &ProfileUpdate::default()).await.unwrap();
    assert!(updated.is_empty());
}

#[tokio::test]
async fn test_list_and_delete_users() {
    let (server, client) = setup_client().await;
    Mock::given(method("GET"))
        .and(path("/scim2/Users"))
        .and(query_param("count", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalResults": 2,
            "Resources": [
                {"id": "u-0", "userName": "admin"},
                {"id": "u-1", "userName": "testuser"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/scim2/Users/u-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.list_users(2).await.unwrap();
    assert_eq!(users.total_results, 2);
    assert_eq!(users.resources[1].user_name, "testuser");
    client.delete_user("u-1").await.unwrap();
}
