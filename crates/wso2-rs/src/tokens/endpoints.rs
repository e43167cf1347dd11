//! Tokens module endpoints.
//!
//! Token issuance authenticates with the OAuth2 client's own id and secret
//! (HTTP Basic); userinfo takes the issued access token as Bearer.

use crate::auth::Credential;
use crate::client::{Target, Wso2Client};
use crate::errors::Wso2Error;
use crate::extract::non_empty;
use crate::helpers::parse_json;
use crate::tokens::models::{Grant, TokenResponse};
use reqwest::Method;
use serde_json::Value;


const TOKEN: &str = "/oauth2/token";
const USERINFO: &str = "/oauth2/userinfo";
const MANAGEMENT_CLIENT: &str = "wso2ctl_management";

/// Scopes the CLI needs across the publisher, devportal and admin APIs.
pub const MANAGEMENT_SCOPES: &[&str] = &[
    "apim:api_view",
    "apim:api_create",
    "apim:api_publish",
    "apim:api_manage",
    "apim:subscribe",
    "apim:app_manage",
    "apim:sub_manage",
    "apim:admin",
    "apim:keymanagers_manage",
];

impl Wso2Client {
    /// POST /oauth2/token
    /// Request a token with any supported grant. `target` picks the token
    /// endpoint of IS (key manager) or APIM (resident key manager).
    pub async fn issue_token(
        &self,
        target: Target,
        client_id: &str,
        client_secret: &str,
        grant: &Grant,
        scopes: &[&str],
    ) -> Result<TokenResponse, Wso2Error> {
        let scope = scopes.join(" ");
        let mut form = grant.form_fields();
        if !scope.is_empty() {
            form.push(("scope", scope.as_str()));
        }
        let credential = Credential::basic(client_id, client_secret);
        let (_, body) = self.send_form(target, TOKEN, &credential, &form).await?;
        let token: TokenResponse = parse_json(&body)?;
        non_empty("access_token", &token.access_token)?;
        Ok(token)
    }


    /// GET /oauth2/userinfo
    /// Claims of the token's subject, filtered by the scopes it was issued with
    pub async fn userinfo(&self, access_token: &str) -> Result<Value, Wso2Error> {
        let credential = Credential::bearer(access_token);
        let (_, body) = self
            .send::<str>(Target::IdentityServer, Method::GET, USERINFO, &credential, None)
            .await?;
        parse_json(&body)
    }


    /// Register the CLI's management client and obtain a Bearer token for the
    /// APIM REST APIs with a password grant as the admin user.
    ///
    /// The token is kept on the client for subsequent management calls.
    pub async fn authorize_management(
        &mut self,
        scopes: &[&str],
    ) -> Result<TokenResponse, Wso2Error> {
        let dcr = self
            .register_management_client(MANAGEMENT_CLIENT, &["password", "refresh_token", "client_credentials"])
            .await?;
        let grant = Grant::Password {
            username: self.admin.username().to_string(),
            password: self.admin.password().to_string(),
        };
        let token = self
            .issue_token(Target::ApiManager, &dcr.client_id, &dcr.client_secret, &grant, scopes)
            .await?;
        self.management_token = Some(token.access_token.clone());
        Ok(token)
    }
}
