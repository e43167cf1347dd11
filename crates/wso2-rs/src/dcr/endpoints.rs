//! Dcr module endpoints.

use crate::client::{Target, Wso2Client};
use crate::dcr::models::{DcrClient, DcrRequest};
use crate::errors::Wso2Error;
use crate::extract::non_empty;
use crate::helpers::parse_json;
use reqwest::Method;


const REGISTER_CLIENT: &str = "/client-registration/v0.17/register";
const DCR_CALLBACK: &str = "www.localhost.com";

impl Wso2Client {
    /// POST /client-registration/v0.17/register
    /// Register an OAuth2 client owned by the admin account, used to obtain
    /// tokens for the publisher, devportal and admin APIs.
    ///
    /// Registering an existing name returns the existing client's keys.
    pub async fn register_management_client(
        &self,
        client_name: &str,
        grant_types: &[&str],
    ) -> Result<DcrClient, Wso2Error> {
        let req = DcrRequest {
            callback_url: DCR_CALLBACK.to_string(),
            client_name: client_name.to_string(),
            owner: self.admin.username().to_string(),
            grant_type: grant_types.join(" "),
            saas_app: true,
        };
        let credential = self.admin.basic();
        let (_, body) = self
            .send(Target::ApiManager, Method::POST, REGISTER_CLIENT, &credential, Some(&req))
            .await?;
        let client: DcrClient = parse_json(&body)?;
        non_empty("clientId", &client.client_id)?;
        non_empty("clientSecret", &client.client_secret)?;
        Ok(client)
    }
}
