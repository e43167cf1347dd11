//! Roles module models.

use crate::users::models::ScimRef;
use derive_more::Display;
use serde::{Deserialize, Serialize};


pub const SCIM_ROLE_SCHEMA: &str = "urn:ietf:params:scim:schemas:extension:2.0:Role";


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} ({})", display_name, id)]
/// Role data model.
///
pub struct Role {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub users: Vec<ScimRef>,
    #[serde(default)]
    pub permissions: Vec<String>,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for create role endpoint.
///
pub struct CreateRoleRequest {
    pub schemas: Vec<String>,
    pub display_name: String,
    pub permissions: Vec<String>,
}
