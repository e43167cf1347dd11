use wso2_rs::apis::models::*;

#[test]
fn test_create_api_request_normalizes_context() {
    let req = CreateApiRequest::http("ForexAPI", "1.0.0", "forex", "http://forex-service:8001", "Unlimited");
    assert_eq!(req.context, "/forex");
    assert_eq!(req.policies, vec!["Unlimited".to_string()]);
    assert!(req.operations.iter().all(|op| op.target == "/*"));
}

#[test]
fn test_api_list_deserialization() {
    let json = r#"{"count":1,"list":[{"id":"1","name":"n","version":"v","context":"/c","lifeCycleStatus":"PUBLISHED"}]}"#;
    let list: ApiList = serde_json::from_str(json).unwrap();
    assert_eq!(list.list[0].lifecycle_status.as_deref(), Some("PUBLISHED"));
    assert!(list.list[0].backend_url().is_none());
}
