//! Auth module models.
//!
//! This module contains the credential sets a request can be issued with.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::fmt;


/// Admin account used for SCIM2, DCR and the management password grant.
#[derive(Clone)]
pub struct AdminAccount {
    username: String,
    password: String,
}


impl AdminAccount {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }


    pub fn username(&self) -> &str {
        &self.username
    }


    pub fn password(&self) -> &str {
        &self.password
    }


    /// The account as an HTTP Basic credential.
    pub fn basic(&self) -> Credential {
        Credential::basic(&self.username, &self.password)
    }
}


impl fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}


/// One credential set for a single request.
///
/// Token issuance and SCIM2 use HTTP Basic; the APIM publisher, devportal and
/// admin APIs take a Bearer token.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    Basic { username: String, password: String },
    Bearer(String),
}


impl Credential {
    pub fn basic(username: &str, password: &str) -> Self {
        Credential::Basic { username: username.to_string(), password: password.to_string() }
    }


    pub fn bearer(token: &str) -> Self {
        Credential::Bearer(token.to_string())
    }


    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        match self {
            Credential::Basic { username, password } => {
                let encoded = BASE64.encode(format!("{}:{}", username, password));
                format!("Basic {}", encoded)
            }
            Credential::Bearer(token) => format!("Bearer {}", token),
        }
    }


    pub fn scheme(&self) -> &'static str {
        match self {
            Credential::Basic { .. } => "basic",
            Credential::Bearer(_) => "bearer",
        }
    }
}


impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Basic { username, .. } => write!(f, "Basic({username}:<redacted>)"),
            Credential::Bearer(_) => write!(f, "Bearer(<redacted>)"),
        }
    }
}
