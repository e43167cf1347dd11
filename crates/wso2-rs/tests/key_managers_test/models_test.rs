use wso2_rs::AdminAccount;
use wso2_rs::key_managers::models::*;

#[test]
fn test_identity_server_request_endpoints() {
    let admin = AdminAccount::new("admin", "secret");
    let req = KeyManagerRequest::identity_server("WSO2-IS", "WSO2-IS", "https://wso2is:9443/", &admin);
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["tokenEndpoint"], "https://wso2is:9443/oauth2/token");
    assert_eq!(value["certificates"]["type"], "JWKS");
    assert_eq!(value["certificates"]["value"], "https://wso2is:9443/oauth2/jwks");
    assert_eq!(value["additionalProperties"]["Username"], "admin");
    assert_eq!(value["additionalProperties"]["Password"], "secret");
}
