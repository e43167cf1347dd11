//! Key_managers module models.
//!
//! Data structures for the APIM admin key-manager API.

use crate::auth::AdminAccount;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::json;


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} ({}, enabled={})", name, type_, enabled)]
/// KeyManager data model.
///
pub struct KeyManager {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}


#[derive(Debug, Deserialize)]
/// Response model for list key managers.
///
pub struct KeyManagerList {
    pub count: u32,
    pub list: Vec<KeyManager>,
}


#[derive(Debug, Clone, Serialize)]
pub struct KeyManagerCertificates {
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for create key manager endpoint.
///
pub struct KeyManagerRequest {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub description: String,
    pub enabled: bool,
    pub well_known_endpoint: String,
    pub introspection_endpoint: String,
    pub client_registration_endpoint: String,
    pub token_endpoint: String,
    pub revoke_endpoint: String,
    pub user_info_endpoint: String,
    pub authorize_endpoint: String,
    pub issuer: String,
    pub certificates: KeyManagerCertificates,
    pub available_grant_types: Vec<String>,
    pub enable_token_generation: bool,
    pub enable_map_oauth_consumer_apps: bool,
    pub enable_oauth_app_creation: bool,
    pub enable_self_validation_jwt: bool,
    pub consumer_key_claim: String,
    pub scopes_claim: String,
    pub additional_properties: serde_json::Value,
}


impl KeyManagerRequest {
    /// Registration of a WSO2 Identity Server reachable from APIM at `is_url`.
    ///
    /// `is_url` is the address APIM resolves, which inside a compose network
    /// is usually not the one the operator uses.
    pub fn identity_server(name: &str, km_type: &str, is_url: &str, admin: &AdminAccount) -> Self {
        let is = is_url.trim_end_matches('/');
        KeyManagerRequest {
            name: name.to_string(),
            display_name: name.to_string(),
            type_: km_type.to_string(),
            description: "WSO2 Identity Server as third-party key manager".to_string(),
            enabled: true,
            well_known_endpoint: format!("{is}/oauth2/token/.well-known/openid-configuration"),
            introspection_endpoint: format!("{is}/oauth2/introspect"),
            client_registration_endpoint: format!("{is}/api/identity/oauth2/dcr/v1.1/register"),
            token_endpoint: format!("{is}/oauth2/token"),
            revoke_endpoint: format!("{is}/oauth2/revoke"),
            user_info_endpoint: format!("{is}/scim2/Me"),
            authorize_endpoint: format!("{is}/oauth2/authorize"),
            issuer: format!("{is}/oauth2/token"),
            certificates: KeyManagerCertificates {
                type_: "JWKS".to_string(),
                value: format!("{is}/oauth2/jwks"),
            },
            available_grant_types: vec![
                "password".to_string(),
                "client_credentials".to_string(),
                "refresh_token".to_string(),
                "authorization_code".to_string(),
            ],
            enable_token_generation: true,
            enable_map_oauth_consumer_apps: true,
            enable_oauth_app_creation: true,
            enable_self_validation_jwt: true,
            consumer_key_claim: "azp".to_string(),
            scopes_claim: "scope".to_string(),
            additional_properties: json!({
                "Username": admin.username(),
                "Password": admin.password(),
                "self_validate_jwt": true,
            }),
        }
    }
}
