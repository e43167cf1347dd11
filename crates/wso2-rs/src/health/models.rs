//! Health module models.

use derive_more::Display;
use serde::{Deserialize, Serialize};


/// One component entry of the IS health-check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthEntry {
    pub key: String,
    pub value: String,
}


/// Response of `GET /api/health-check/v1.0/health`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IdentityServerHealth {
    #[serde(default)]
    pub health: Vec<HealthEntry>,
}


/// Outcome of probing one product.
#[derive(Debug, Clone, Display)]
#[display("{product}: HTTP {status}")]
pub struct HealthStatus {
    pub product: String,
    pub status: u16,
    pub detail: String,
}
