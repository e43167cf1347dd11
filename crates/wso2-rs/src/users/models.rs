//! Users module models.
//!
//! SCIM2 user resources as served by the Identity Server.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};


pub const SCIM_USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
pub const SCIM_PATCH_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:PatchOp";


/// Wrap operations into a SCIM2 PatchOp message.
pub fn patch_op(operations: Vec<Value>) -> Value {
    json!({
        "schemas": [SCIM_PATCH_SCHEMA],
        "Operations": operations,
    })
}


#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScimName {
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub formatted: Option<String>,
}


/// Reference to another SCIM2 resource (role member, user role).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScimRef {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} ({})", user_name, id)]
/// ScimUser data model.
///
pub struct ScimUser {
    pub id: String,
    pub user_name: String,
    #[serde(default)]
    pub name: Option<ScimName>,
    /// IS returns either plain strings or `{value, primary}` objects here.
    #[serde(default)]
    pub emails: Vec<Value>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub roles: Vec<ScimRef>,
}


impl ScimUser {
    pub fn primary_email(&self) -> Option<String> {
        self.emails.iter().find_map(|e| match e {
            Value::String(s) => Some(s.clone()),
            Value::Object(o) => o.get("value").and_then(Value::as_str).map(str::to_string),
            _ => None,
        })
    }
}


#[derive(Debug, Deserialize)]
/// Response model for SCIM2 list and filter queries.
///
pub struct ScimListResponse<T> {
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
}


/// A user to provision.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone: Option<String>,
    /// Role display names to assign once the user exists.
    pub roles: Vec<String>,
}


impl NewUser {
    /// SCIM2 create payload. The account is created active so the password
    /// grant works right away.
    pub fn to_scim(&self) -> Value {
        let given = self.given_name.clone().unwrap_or_else(|| self.username.clone());
        let family = self.family_name.clone().unwrap_or_else(|| self.username.clone());
        let mut user = json!({
            "schemas": [SCIM_USER_SCHEMA],
            "userName": self.username,
            "password": self.password,
            "active": true,
            "name": {
                "givenName": given,
                "familyName": family,
                "formatted": format!("{given} {family}"),
            },
            "emails": [{ "value": self.email, "primary": true }],
        });
        if let Some(phone) = &self.phone {
            user["phoneNumbers"] = json!([{ "type": "mobile", "value": phone }]);
        }
        user
    }
}


/// Fields to change on an existing user; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub phone: Option<String>,
}


impl ProfileUpdate {
    /// PatchOp `replace` operations plus the names of the fields they touch.
    pub fn operations(&self) -> (Vec<Value>, Vec<&'static str>) {
        let mut ops = Vec::new();
        let mut fields = Vec::new();
        if let Some(email) = &self.email {
            ops.push(json!({ "op": "replace", "path": "emails", "value": [email] }));
            fields.push("email");
        }
        if self.given_name.is_some() || self.family_name.is_some() {
            let mut name = serde_json::Map::new();
            if let Some(given) = &self.given_name {
                name.insert("givenName".to_string(), json!(given));
                fields.push("given_name");
            }
            if let Some(family) = &self.family_name {
                name.insert("familyName".to_string(), json!(family));
                fields.push("family_name");
            }
            ops.push(json!({ "op": "replace", "path": "name", "value": name }));
        }
        if let Some(phone) = &self.phone {
            ops.push(json!({ "op": "replace", "path": "phoneNumbers", "value": [phone] }));
            fields.push("phone");
        }
        (ops, fields)
    }
}
