//! Dcr module models.
//!
//! Request and response bodies of the APIM dynamic client registration API.

use derive_more::Display;
use serde::{Deserialize, Serialize};


/// Request model for `POST /client-registration/v0.17/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DcrRequest {
    pub callback_url: String,
    pub client_name: String,
    pub owner: String,
    /// Space separated grant types.
    pub grant_type: String,
    pub saas_app: bool,
}


#[derive(Debug, Clone, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("DcrClient {{ client_name: {}, client_id: {} }}", client_name, client_id)]
/// Registered OAuth2 client.
///
pub struct DcrClient {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(rename = "callBackURL", default)]
    pub callback_url: Option<String>,
}
