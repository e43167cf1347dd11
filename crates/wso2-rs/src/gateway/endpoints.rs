//! Gateway module endpoints.

use crate::auth::Credential;
use crate::client::{Target, Wso2Client};
use crate::errors::Wso2Error;
use crate::gateway::models::{GatewayResponse, invocation_path};
use reqwest::Method;

impl Wso2Client {
    /// GET https://gateway/{context}/{version}{resource} with an application token
    pub async fn invoke_gateway(
        &self,
        context: &str,
        version: &str,
        resource: &str,
        access_token: &str,
    ) -> Result<GatewayResponse, Wso2Error> {
        let url_path = invocation_path(context, version, resource);
        let credential = Credential::bearer(access_token);
        let (status, body) = self
            .send::<str>(Target::Gateway, Method::GET, &url_path, &credential, None)
            .await?;
        Ok(GatewayResponse { url_path, status: status.as_u16(), body })
    }
}
