//! Subscriptions module endpoints.

use crate::client::Wso2Client;
use crate::errors::Wso2Error;
use crate::extract::non_empty;
use crate::helpers::{parse_json, with_query};
use crate::subscriptions::models::{CreateSubscriptionRequest, Subscription, SubscriptionList};
use reqwest::Method;


const SUBSCRIPTIONS: &str = "/api/am/devportal/v3/subscriptions";

impl Wso2Client {
    /// POST /subscriptions
    /// Subscribe an application to a published API
    pub async fn create_subscription(
        &self,
        application_id: &str,
        api_id: &str,
        throttling_policy: &str,
    ) -> Result<Subscription, Wso2Error> {
        let req = CreateSubscriptionRequest {
            application_id: application_id.to_string(),
            api_id: api_id.to_string(),
            throttling_policy: throttling_policy.to_string(),
        };
        let (_, body) = self.management_request(Method::POST, SUBSCRIPTIONS, Some(&req)).await?;
        let sub: Subscription = parse_json(&body)?;
        non_empty("subscriptionId", &sub.subscription_id)?;
        Ok(sub)
    }


    /// GET /subscriptions?applicationId=..
    pub async fn list_subscriptions(
        &self,
        application_id: &str,
    ) -> Result<SubscriptionList, Wso2Error> {
        let url = with_query(SUBSCRIPTIONS, &[("applicationId", application_id)])?;
        let (_, body) = self.management_request::<str>(Method::GET, &url, None).await?;
        parse_json(&body)
    }
}
