//! Apis module models.
//!
//! This module contains data structures for publisher APIs, their revisions and deployments.

use crate::extract::field_in;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One resource of an API.
///
pub struct ApiOperation {
    pub target: String,
    pub verb: String,
    pub auth_type: String,
    pub throttling_policy: String,
}


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for create API endpoint.
///
pub struct CreateApiRequest {
    pub name: String,
    pub version: String,
    pub context: String,
    pub description: String,
    pub endpoint_config: Value,
    pub policies: Vec<String>,
    pub transport: Vec<String>,
    pub operations: Vec<ApiOperation>,
}


impl CreateApiRequest {
    /// An HTTP-backed API proxying every verb on `/*` to `backend_url`.
    pub fn http(name: &str, version: &str, context: &str, backend_url: &str, tier: &str) -> Self {
        let context = if context.starts_with('/') {
            context.to_string()
        } else {
            format!("/{context}")
        };
        let operations = ["GET", "POST", "PUT", "DELETE", "PATCH"]
            .iter()
            .map(|verb| ApiOperation {
                target: "/*".to_string(),
                verb: verb.to_string(),
                auth_type: "Application & Application User".to_string(),
                throttling_policy: tier.to_string(),
            })
            .collect();
        CreateApiRequest {
            name: name.to_string(),
            version: version.to_string(),
            context,
            description: format!("{name} {version}"),
            endpoint_config: json!({
                "endpoint_type": "http",
                "production_endpoints": { "url": backend_url },
                "sandbox_endpoints": { "url": backend_url },
            }),
            policies: vec![tier.to_string()],
            transport: vec!["http".to_string(), "https".to_string()],
            operations,
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} {} {} ({})", name, version, context, id)]
/// Api data model.
///
pub struct Api {
    pub id: String,
    pub name: String,
    pub version: String,
    pub context: String,
    #[serde(rename = "lifeCycleStatus", default)]
    pub lifecycle_status: Option<String>,
    #[serde(default)]
    pub endpoint_config: Option<Value>,
}


impl Api {
    /// Production backend URL, if an HTTP endpoint is configured.
    pub fn backend_url(&self) -> Option<String> {
        self.endpoint_config
            .as_ref()
            .and_then(|cfg| field_in(cfg, "production_endpoints.url").ok())
    }
}


#[derive(Debug, Deserialize)]
/// Response model for list APIs.
///
pub struct ApiList {
    pub count: u32,
    pub list: Vec<Api>,
}


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Gateway environment a revision is (or should be) deployed to.
///
pub struct RevisionDeployment {
    pub name: String,
    #[serde(default)]
    pub vhost: Option<String>,
    #[serde(default)]
    pub display_on_devportal: bool,
    #[serde(default, skip_serializing)]
    pub status: Option<String>,
}


#[derive(Debug, Clone, Serialize)]
pub struct CreateRevisionRequest {
    pub description: String,
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("{} ({})", display_name, id)]
/// Revision data model.
///
pub struct Revision {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deployment_info: Vec<RevisionDeployment>,
}


#[derive(Debug, Deserialize)]
/// Response model for list revisions.
///
pub struct RevisionList {
    pub count: u32,
    pub list: Vec<Revision>,
}


impl RevisionList {
    /// Revision currently deployed to `environment`, if any.
    pub fn deployed_to(&self, environment: &str) -> Option<&Revision> {
        self.list
            .iter()
            .find(|rev| rev.deployment_info.iter().any(|d| d.name == environment))
    }
}
