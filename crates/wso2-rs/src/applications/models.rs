//! Applications module models.
//!
//! This module contains data structures for devportal applications and their OAuth2 keys.

use derive_more::Display;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} ({})", name, application_id)]
/// Application data model.
///
pub struct Application {
    pub application_id: String,
    pub name: String,
    #[serde(default)]
    pub throttling_policy: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
}


#[derive(Debug, Deserialize)]
/// Response model for list applications.
///
pub struct ApplicationList {
    pub count: u32,
    pub list: Vec<Application>,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for create application endpoint.
///
pub struct CreateApplicationRequest {
    pub name: String,
    pub throttling_policy: String,
    pub description: String,
    pub token_type: String,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for generate keys endpoint.
///
pub struct GenerateKeysRequest {
    pub key_type: String,
    pub key_manager: String,
    pub grant_types_to_be_supported: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    pub scopes: Vec<String>,
    pub validity_time: u64,
}


impl GenerateKeysRequest {
    /// Production keys from `key_manager` for the given grants.
    pub fn production(key_manager: &str, grant_types: &[String], callback_url: Option<&str>) -> Self {
        GenerateKeysRequest {
            key_type: "PRODUCTION".to_string(),
            key_manager: key_manager.to_string(),
            grant_types_to_be_supported: grant_types.to_vec(),
            callback_url: callback_url.map(str::to_string),
            scopes: vec!["default".to_string()],
            validity_time: 3600,
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Response model for generate keys endpoint.
///
pub struct ApplicationKeys {
    #[serde(default)]
    pub key_mapping_id: Option<String>,
    #[serde(default)]
    pub key_manager: Option<String>,
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub supported_grant_types: Vec<String>,
    #[serde(default)]
    pub callback_url: Option<String>,
    #[serde(default)]
    pub key_state: Option<String>,
    #[serde(default)]
    pub key_type: Option<String>,
}


/// An application together with the OAuth2 client created for it.
#[derive(Debug, Clone, Serialize, Display)]
#[display("application {} client_id {}", application_id, client_id)]
pub struct ApplicationCredentials {
    pub application_id: String,
    pub name: String,
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: Option<String>,
}


impl ApplicationCredentials {
    pub fn new(app: &Application, keys: &ApplicationKeys) -> Self {
        ApplicationCredentials {
            application_id: app.application_id.clone(),
            name: app.name.clone(),
            client_id: keys.consumer_key.clone(),
            client_secret: keys.consumer_secret.clone(),
            callback_url: keys.callback_url.clone(),
        }
    }
}
