//! Users module endpoints.
//!
//! SCIM2 `/scim2/Users` on the Identity Server, authenticated as the admin account.

use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::helpers::{parse_json, with_query};
use crate::users::models::{NewUser, ProfileUpdate, ScimListResponse, ScimUser, patch_op};
use reqwest::Method;
use serde_json::json;


const USERS: &str = "/scim2/Users";
const USER: &str = "/scim2/Users/{}";

impl Wso2Client {
    /// POST /scim2/Users
    /// An existing username comes back as HTTP 409
    pub async fn register_user(&self, user: &NewUser) -> Result<ScimUser, Wso2Error> {
        let payload = user.to_scim();
        let (_, body) = self.admin_request(Method::POST, USERS, Some(&payload)).await?;
        parse_json(&body)
    }


    /// GET /scim2/Users?filter=userName eq {username}
    pub async fn find_user(&self, username: &str) -> Result<Option<ScimUser>, Wso2Error> {
        let filter = format!("userName eq {username}");
        let url = with_query(USERS, &[("filter", filter.as_str())])?;
        let (_, body) = self.admin_request::<str>(Method::GET, &url, None).await?;
        let found: ScimListResponse<ScimUser> = parse_json(&body)?;
        Ok(found.resources.into_iter().next())
    }


    /// Like [`find_user`](Wso2Client::find_user) but an unknown username is an error
    pub async fn require_user(&self, username: &str) -> Result<ScimUser, Wso2Error> {
        self.find_user(username)
            .await?
            .ok_or_else(|| Wso2Error::Other(format!("user '{username}' not found")))
    }


    /// GET /scim2/Users/{id}
    pub async fn get_user(&self, user_id: &str) -> Result<ScimUser, Wso2Error> {
        let url = USER.replace("{}", user_id);
        let (_, body) = self.admin_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }


    /// GET /scim2/Users?startIndex=1&count=..
    pub async fn list_users(&self, count: u32) -> Result<ScimListResponse<ScimUser>, Wso2Error> {
        let count = count.to_string();
        let url = with_query(USERS, &[("startIndex", "1"), ("count", count.as_str())])?;
        let (_, body) = self.admin_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }


    /// PATCH /scim2/Users/{id} replacing `active`
    pub async fn set_user_active(&self, user_id: &str, active: bool) -> Result<(), Wso2Error> {
        let url = USER.replace("{}", user_id);
        let patch = patch_op(vec![json!({ "op": "replace", "value": { "active": active } })]);
        self.admin_request(Method::PATCH, &url, Some(&patch)).await?;
        Ok(())
    }


    /// DELETE /scim2/Users/{id}
    pub async fn delete_user(&self, user_id: &str) -> Result<(), Wso2Error> {
        let url = USER.replace("{}", user_id);
        self.admin_request::<str>(Method::DELETE, &url, None).await?;
        Ok(())
    }


    /// PATCH /scim2/Users/{id} replacing the password; also re-activates the account
    pub async fn reset_password(&self, user_id: &str, new_password: &str) -> Result<(), Wso2Error> {
        let url = USER.replace("{}", user_id);
        let patch = patch_op(vec![json!({
            "op": "replace",
            "value": { "password": new_password, "active": true },
        })]);
        self.admin_request(Method::PATCH, &url, Some(&patch)).await?;
        Ok(())
    }


    /// PATCH /scim2/Users/{id} with one `replace` per provided field
    ///
    /// # Returns
    /// Names of the updated fields; empty when there was nothing to send
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Vec<String>, Wso2Error> {
        let (ops, fields) = update.operations();
        if ops.is_empty() {
            return Ok(Vec::new());
        }
        let url = USER.replace("{}", user_id);
        self.admin_request(Method::PATCH, &url, Some(&patch_op(ops))).await?;
        Ok(fields.into_iter().map(str::to_string).collect())
    }
}
