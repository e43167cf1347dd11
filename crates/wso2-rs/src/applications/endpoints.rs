//! Applications module endpoints.
//!
//! Devportal v3 applications. All calls need the management Bearer token.

use crate::applications::models::{
    Application, ApplicationKeys, ApplicationList, CreateApplicationRequest, GenerateKeysRequest,
};
use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::extract::non_empty;
use crate::helpers::parse_json;
use reqwest::Method;


const APPLICATIONS: &str = "/api/am/devportal/v3/applications";
const APPLICATION: &str = "/api/am/devportal/v3/applications/{}";
const GENERATE_KEYS: &str = "/api/am/devportal/v3/applications/{}/generate-keys";

impl Wso2Client {
    /// POST /applications
    pub async fn create_application(
        &self,
        name: &str,
        throttling_policy: &str,
        description: &str,
    ) -> Result<Application, Wso2Error> {
        let req = CreateApplicationRequest {
            name: name.to_string(),
            throttling_policy: throttling_policy.to_string(),
            description: description.to_string(),
            token_type: "JWT".to_string(),
        };
        let (_, body) = self.management_request(Method::POST, APPLICATIONS, Some(&req)).await?;
        let app: Application = parse_json(&body)?;
        non_empty("applicationId", &app.application_id)?;
        Ok(app)
    }


    /// GET /applications
    pub async fn list_applications(&self) -> Result<ApplicationList, Wso2Error> {
        let (_, body) = self.management_request::<str>(Method::GET, APPLICATIONS, None).await?;
        parse_json(&body)
    }


    /// GET /applications/{applicationId}
    pub async fn get_application(&self, application_id: &str) -> Result<Application, Wso2Error> {
        let url = APPLICATION.replace("{}", application_id);
        let (_, body) = self.management_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }


    /// DELETE /applications/{applicationId}
    pub async fn delete_application(&self, application_id: &str) -> Result<(), Wso2Error> {
        let url = APPLICATION.replace("{}", application_id);
        self.management_request::<str>(Method::DELETE, &url, None).await?;
        Ok(())
    }


    /// POST /applications/{applicationId}/generate-keys
    /// Creates the OAuth2 client in the chosen key manager
    pub async fn generate_keys(
        &self,
        application_id: &str,
        req: &GenerateKeysRequest,
    ) -> Result<ApplicationKeys, Wso2Error> {
        let url = GENERATE_KEYS.replace("{}", application_id);
        let (_, body) = self.management_request(Method::POST, &url, Some(req)).await?;
        let keys: ApplicationKeys = parse_json(&body)?;
        non_empty("consumerKey", &keys.consumer_key)?;
        non_empty("consumerSecret", &keys.consumer_secret)?;
        Ok(keys)
    }
}
