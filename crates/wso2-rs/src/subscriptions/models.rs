//! Subscriptions module models.

use derive_more::Display;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// Request model for create subscription endpoint.
///
pub struct CreateSubscriptionRequest {
    pub application_id: String,
    pub api_id: String,
    pub throttling_policy: String,
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("subscription {} app {} -> api {} [{}]", subscription_id, application_id, api_id, throttling_policy)]
/// Subscription data model.
///
pub struct Subscription {
    pub subscription_id: String,
    pub application_id: String,
    pub api_id: String,
    #[serde(default)]
    pub throttling_policy: String,
    #[serde(default)]
    pub status: Option<String>,
}


#[derive(Debug, Deserialize)]
/// Response model for list subscriptions.
///
pub struct SubscriptionList {
    pub count: u32,
    pub list: Vec<Subscription>,
}
