//! Apis module endpoints.
//!
//! Publisher v4 API lifecycle: create, publish, revision, deploy. All calls
//! need the management Bearer token.

use crate::apis::models::{
    Api, ApiList, CreateApiRequest, CreateRevisionRequest, Revision, RevisionDeployment,
    RevisionList,
};
use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::extract::{field, non_empty};
use crate::helpers::{parse_json, with_query};
use reqwest::Method;


const APIS: &str = "/api/am/publisher/v4/apis";
const API: &str = "/api/am/publisher/v4/apis/{}";
const CHANGE_LIFECYCLE: &str = "/api/am/publisher/v4/apis/change-lifecycle";
const REVISIONS: &str = "/api/am/publisher/v4/apis/{}/revisions";
const DEPLOY_REVISION: &str = "/api/am/publisher/v4/apis/{}/deploy-revision";

impl Wso2Client {
    /// POST /apis
    pub async fn create_api(&self, req: &CreateApiRequest) -> Result<Api, Wso2Error> {
        let (_, body) = self.management_request(Method::POST, APIS, Some(req)).await?;
        let api: Api = parse_json(&body)?;
        non_empty("id", &api.id)?;
        Ok(api)
    }


    /// GET /apis
    pub async fn list_apis(&self) -> Result<ApiList, Wso2Error> {
        let (_, body) = self.management_request::<str>(Method::GET, APIS, None).await?;
        parse_json(&body)
    }


    /// GET /apis/{apiId}
    pub async fn get_api(&self, api_id: &str) -> Result<Api, Wso2Error> {
        let url = API.replace("{}", api_id);
        let (_, body) = self.management_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }


    /// POST /apis/change-lifecycle?apiId=..&action=Publish
    ///
    /// # Returns
    /// The lifecycle state reported after the change (normally `Published`)
    pub async fn publish_api(&self, api_id: &str) -> Result<String, Wso2Error> {
        let url = with_query(CHANGE_LIFECYCLE, &[("apiId", api_id), ("action", "Publish")])?;
        let (_, body) = self.management_request::<str>(Method::POST, &url, None).await?;
        field(&body, "lifecycleState.state")
    }


    /// POST /apis/{apiId}/revisions
    pub async fn create_revision(
        &self,
        api_id: &str,
        description: &str,
    ) -> Result<Revision, Wso2Error> {
        let url = REVISIONS.replace("{}", api_id);
        let req = CreateRevisionRequest { description: description.to_string() };
        let (_, body) = self.management_request(Method::POST, &url, Some(&req)).await?;
        let rev: Revision = parse_json(&body)?;
        non_empty("id", &rev.id)?;
        Ok(rev)
    }


    /// POST /apis/{apiId}/deploy-revision?revisionId=..
    /// Deploy one revision to a single gateway environment
    pub async fn deploy_revision(
        &self,
        api_id: &str,
        revision_id: &str,
        environment: &str,
        vhost: &str,
    ) -> Result<Vec<RevisionDeployment>, Wso2Error> {
        let path = DEPLOY_REVISION.replace("{}", api_id);
        let url = with_query(&path, &[("revisionId", revision_id)])?;
        let req = vec![RevisionDeployment {
            name: environment.to_string(),
            vhost: Some(vhost.to_string()),
            display_on_devportal: true,
            status: None,
        }];
        let (_, body) = self.management_request(Method::POST, &url, Some(&req)).await?;
        if body.trim().is_empty() {
            return Ok(req);
        }
        parse_json(&body)
    }


    /// GET /apis/{apiId}/revisions?query=deployed:true
    pub async fn deployed_revisions(&self, api_id: &str) -> Result<RevisionList, Wso2Error> {
        let path = REVISIONS.replace("{}", api_id);
        let url = with_query(&path, &[("query", "deployed:true")])?;
        let (_, body) = self.management_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }
}
