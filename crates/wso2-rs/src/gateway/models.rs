//! Gateway module models.

use derive_more::Display;
use serde::Serialize;


/// Answer of the backend as proxied by the gateway.
#[derive(Debug, Clone, Serialize, Display)]
#[display("GET {} -> {}", url_path, status)]
pub struct GatewayResponse {
    pub url_path: String,
    pub status: u16,
    pub body: String,
}


/// `{context}/{version}{resource}` with exactly one slash at each joint.
pub fn invocation_path(context: &str, version: &str, resource: &str) -> String {
    let context = context.trim_matches('/');
    let resource = resource.trim_start_matches('/');
    if resource.is_empty() {
        format!("/{context}/{version}")
    } else {
        format!("/{context}/{version}/{resource}")
    }
}
