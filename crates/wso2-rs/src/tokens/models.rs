//! Tokens module models.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Wso2Error;


/// OAuth2 grant to request a token with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    Password { username: String, password: String },
    ClientCredentials,
    RefreshToken { refresh_token: String },
    AuthorizationCode { code: String, redirect_uri: String },
}


impl Grant {
    pub fn grant_type(&self) -> &'static str {
        match self {
            Grant::Password { .. } => "password",
            Grant::ClientCredentials => "client_credentials",
            Grant::RefreshToken { .. } => "refresh_token",
            Grant::AuthorizationCode { .. } => "authorization_code",
        }
    }


    /// Form fields for the token endpoint, excluding scope.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("grant_type", self.grant_type())];
        match self {
            Grant::Password { username, password } => {
                fields.push(("username", username.as_str()));
                fields.push(("password", password.as_str()));
            }
            Grant::ClientCredentials => {}
            Grant::RefreshToken { refresh_token } => fields.push(("refresh_token", refresh_token.as_str())),
            Grant::AuthorizationCode { code, redirect_uri } => {
                fields.push(("code", code.as_str()));
                fields.push(("redirect_uri", redirect_uri.as_str()));
            }
        }
        fields
    }
}


#[derive(Debug, Clone, Serialize, Deserialize, Display)]
#[display("TokenResponse {{ token_type: {}, expires_in: {} }}", token_type, expires_in)]
/// Response of the `/oauth2/token` endpoint.
///
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}


impl TokenResponse {
    /// Claims of the `id_token` payload, `None` when no id token was issued.
    ///
    /// The signature is not verified; the claims are for display only.
    pub fn id_token_claims(&self) -> Option<Result<Value, Wso2Error>> {
        self.id_token.as_deref().map(decode_jwt_claims)
    }
}


fn decode_jwt_claims(jwt: &str) -> Result<Value, Wso2Error> {
    let payload = jwt
        .split('.')
        .nth(1)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| Wso2Error::Other("id_token is not a JWT".to_string()))?;
    // some issuers keep the padding
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| Wso2Error::Other(format!("id_token payload is not base64url: {e}")))?;
    Ok(serde_json::from_slice(&bytes)?)
}
