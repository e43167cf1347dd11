use wso2_rs::tokens::models::*;

#[test]
fn test_grant_form_fields() {
    let grant = Grant::AuthorizationCode { code: "c0de".into(), redirect_uri: "http://localhost:8080/callback".into() };
    let fields = grant.form_fields();
    assert_eq!(fields[0], ("grant_type", "authorization_code"));
    assert!(fields.contains(&("code", "c0de")));
    assert!(fields.contains(&("redirect_uri", "http://localhost:8080/callback")));
    assert_eq!(Grant::ClientCredentials.form_fields().len(), 1);
}

#[test]
fn test_token_response_minimal() {
    let token: TokenResponse = serde_json::from_str(r#"{"access_token":"a"}"#).unwrap();
    assert!(token.refresh_token.is_none());
    assert_eq!(token.expires_in, 0);
}

const ID_TOKEN: &str = "eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiJ0ZXN0dXNlciIsImF1ZCI6ImNrLTEiLCJlbWFpbCI6InRlc3R1c2VyQGV4YW1wbGUuY29tIn0.c2ln";

#[test]
fn test_id_token_claims_decoded() {
    let token: TokenResponse = serde_json::from_value(serde_json::json!({
        "access_token": "a",
        "id_token": ID_TOKEN
    }))
    .unwrap();
    let claims = token.id_token_claims().unwrap().unwrap();
    assert_eq!(claims["sub"], "testuser");
    assert_eq!(claims["aud"], "ck-1");
    assert_eq!(claims["email"], "testuser@example.com");
}

#[test]
fn test_id_token_claims_absent_or_malformed() {
    let mut token: TokenResponse = serde_json::from_str(r#"{"access_token":"a"}"#).unwrap();
    assert!(token.id_token_claims().is_none());
    token.id_token = Some("not-a-jwt".into());
    assert!(token.id_token_claims().unwrap().is_err());
    token.id_token = Some("a.!!!.b".into());
    assert!(token.id_token_claims().unwrap().is_err());
}
