//! Roles module endpoints.

use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::extract::field;
use crate::helpers::{parse_json, with_query};
use crate::roles::models::{CreateRoleRequest, Role, SCIM_ROLE_SCHEMA};
use crate::users::models::{ScimListResponse, patch_op};
use reqwest::Method;
use serde_json::json;


const ROLES: &str = "/scim2/Roles";
const ROLE: &str = "/scim2/Roles/{}";

impl Wso2Client {
    /// POST /scim2/Roles
    /// An existing display name comes back as HTTP 409
    pub async fn create_role(&self, name: &str, permissions: &[String]) -> Result<Role, Wso2Error> {
        let req = CreateRoleRequest {
            schemas: vec![SCIM_ROLE_SCHEMA.to_string()],
            display_name: name.to_string(),
            permissions: permissions.to_vec(),
        };
        let (_, body) = self.admin_request(Method::POST, ROLES, Some(&req)).await?;
        parse_json(&body)
    }


    /// GET /scim2/Roles
    pub async fn list_roles(&self) -> Result<ScimListResponse<Role>, Wso2Error> {
        let (_, body) = self.admin_request::<str>(Method::GET, ROLES, None).await?;
        parse_json(&body)
    }


    /// Id of the role with this display name
    pub async fn find_role_id(&self, name: &str) -> Result<String, Wso2Error> {
        let filter = format!("displayName eq {name}");
        let url = with_query(ROLES, &[("filter", filter.as_str())])?;
        let (_, body) = self.admin_request::<str>(Method::GET, &url, None).await?;
        field(&body, "Resources.0.id")
    }


    /// DELETE /scim2/Roles/{id}
    pub async fn delete_role(&self, role_id: &str) -> Result<(), Wso2Error> {
        let url = ROLE.replace("{}", role_id);
        self.admin_request::<str>(Method::DELETE, &url, None).await?;
        Ok(())
    }


    /// PATCH /scim2/Roles/{id} adding one user as member
    pub async fn assign_user_to_role(&self, role_id: &str, user_id: &str) -> Result<(), Wso2Error> {
        let url = ROLE.replace("{}", role_id);
        let patch = patch_op(vec![json!({
            "op": "add",
            "path": "users",
            "value": [{ "value": user_id }],
        })]);
        self.admin_request(Method::PATCH, &url, Some(&patch)).await?;
        Ok(())
    }
}
