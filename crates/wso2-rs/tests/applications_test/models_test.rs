use wso2_rs::applications::models::*;

#[test]
fn test_application_deserialization() {
    let json = r#"{"applicationId":"a","name":"n","throttlingPolicy":"Unlimited","attributes":{}}"#;
    let app: Application = serde_json::from_str(json).unwrap();
    assert_eq!(app.throttling_policy.as_deref(), Some("Unlimited"));
}

#[test]
fn test_generate_keys_request_serialization() {
    let req = GenerateKeysRequest::production("Resident Key Manager", &["password".to_string()], None);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["keyType"], "PRODUCTION");
    assert_eq!(value["grantTypesToBeSupported"][0], "password");
    assert!(value.get("callbackUrl").is_none());
}
