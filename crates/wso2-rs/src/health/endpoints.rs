//! Health module endpoints.
//!
//! Both products are probed with the admin account; a non-2xx answer is a failure.

use crate::client::{Target, Wso2Client};
use crate::errors::Wso2Error;
use crate::health::models::{HealthStatus, IdentityServerHealth};
use crate::helpers::parse_json;
use reqwest::Method;


const IS_HEALTH: &str = "/api/health-check/v1.0/health";
const AM_VERSION: &str = "/services/Version";

impl Wso2Client {
    /// GET /api/health-check/v1.0/health on the Identity Server
    pub async fn identity_server_health(&self) -> Result<HealthStatus, Wso2Error> {
        let (status, body) = self.admin_request::<str>(Method::GET, IS_HEALTH, None).await?;
        let health: IdentityServerHealth = parse_json(&body)?;
        let detail = health
            .health
            .iter()
            .map(|h| format!("{}={}", h.key, h.value))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(HealthStatus {
            product: "identity-server".to_string(),
            status: status.as_u16(),
            detail,
        })
    }


    /// GET /services/Version on API Manager (SOAP admin service, XML body)
    pub async fn api_manager_health(&self) -> Result<HealthStatus, Wso2Error> {
        let credential = self.admin.basic();
        let (status, body) = self
            .send::<str>(Target::ApiManager, Method::GET, AM_VERSION, &credential, None)
            .await?;
        Ok(HealthStatus {
            product: "api-manager".to_string(),
            status: status.as_u16(),
            detail: body.trim().chars().take(120).collect(),
        })
    }
}
