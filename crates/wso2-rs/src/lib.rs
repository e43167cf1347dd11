//! WSO2 Rust SDK
//!
//! Client for the management REST APIs of WSO2 Identity Server (SCIM2, OAuth2)
//! and WSO2 API Manager (DCR, publisher, devportal, admin, gateway).
//!
//! # Quick Start
//!
//! ```no_run
//! use wso2_rs::{AdminAccount, Wso2Client};
//! use wso2_rs::tokens::MANAGEMENT_SCOPES;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Admin credentials for both products
//! let admin = AdminAccount::new("admin", "admin");
//!
//! // 2. A client against the local development endpoints
//! let mut client = Wso2Client::new(admin)?;
//!
//! // 3. Bearer token for the APIM management APIs
//! client.authorize_management(MANAGEMENT_SCOPES).await?;
//!
//! let apis = client.list_apis().await?;
//! println!("Found {} APIs", apis.count);
//! # Ok(())
//! # }
//! ```
//!
//! # Main Components
//!
//! - [`Wso2Client`] - request issuer with one method per vendor operation
//! - [`Credential`] - Basic or Bearer credential for a single request
//! - [`extract`] - pull fields out of raw JSON responses
//!
//! All endpoint methods are implemented on [`Wso2Client`].


// Core modules
pub mod auth;           // Credential sets
pub mod client;         // Main HTTP client
pub mod errors;         // Error types
pub mod extract;        // JSON field extraction
pub(crate) mod helpers; // Internal HTTP helpers


// API endpoint modules
pub mod apis;           // Publisher API lifecycle
pub mod applications;   // Devportal applications and keys
pub mod dcr;            // Dynamic client registration
pub mod gateway;        // Calls through the API gateway
pub mod health;         // Product health probes
pub mod key_managers;   // Admin key-manager registration
pub mod roles;          // SCIM2 roles
pub mod subscriptions;  // Devportal subscriptions
pub mod tokens;         // OAuth2 token issuance
pub mod users;          // SCIM2 users


// Re-exports for convenient access
pub use auth::{AdminAccount, Credential};
pub use client::{ClientConfig, Target, Wso2Client};
pub use errors::Wso2Error;
pub use reqwest::{Method, StatusCode};
