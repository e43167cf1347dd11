use crate::auth::{AdminAccount, Credential};
use crate::errors::Wso2Error;
use crate::helpers;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;


// Local development defaults (docker port mappings)
pub const DEFAULT_IDENTITY_SERVER_URL: &str = "https://localhost:9444";
pub const DEFAULT_API_MANAGER_URL: &str = "https://localhost:9443";
pub const DEFAULT_GATEWAY_URL: &str = "https://localhost:8243";


/// Which vendor surface a request goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    IdentityServer,
    ApiManager,
    Gateway,
}


/// Connection settings for [`Wso2Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub identity_server_url: String,
    pub api_manager_url: String,
    pub gateway_url: String,
    /// Skip certificate validation. The products ship self-signed certs.
    pub accept_invalid_certs: bool,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}


impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            identity_server_url: DEFAULT_IDENTITY_SERVER_URL.to_string(),
            api_manager_url: DEFAULT_API_MANAGER_URL.to_string(),
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            accept_invalid_certs: true,
            timeout: None,
        }
    }
}


/// Client for the WSO2 Identity Server and API Manager REST APIs.
///
/// Endpoint methods are grouped by resource:
///
/// ## Identity Server
/// - [`register_user`](Wso2Client::register_user), [`find_user`](Wso2Client::find_user),
///   [`set_user_active`](Wso2Client::set_user_active), [`reset_password`](Wso2Client::reset_password)
/// - [`create_role`](Wso2Client::create_role), [`assign_user_to_role`](Wso2Client::assign_user_to_role)
/// - [`issue_token`](Wso2Client::issue_token), [`userinfo`](Wso2Client::userinfo)
///
/// ## API Manager
/// - [`authorize_management`](Wso2Client::authorize_management) must run before any
///   publisher, devportal or admin call
/// - [`create_key_manager`](Wso2Client::create_key_manager)
/// - [`create_application`](Wso2Client::create_application), [`generate_keys`](Wso2Client::generate_keys)
/// - [`create_api`](Wso2Client::create_api), [`publish_api`](Wso2Client::publish_api),
///   [`create_revision`](Wso2Client::create_revision), [`deploy_revision`](Wso2Client::deploy_revision)
/// - [`create_subscription`](Wso2Client::create_subscription)
///
/// # Example
/// ```no_run
/// use wso2_rs::{AdminAccount, Wso2Client};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut client = Wso2Client::new(AdminAccount::new("admin", "admin"))?;
/// client.authorize_management(wso2_rs::tokens::MANAGEMENT_SCOPES).await?;
/// let apps = client.list_applications().await?;
/// println!("{} applications", apps.count);
/// # Ok(())
/// # }
/// ```
pub struct Wso2Client {
    pub(crate) http_client: Client,
    pub(crate) admin: AdminAccount,
    pub(crate) config: ClientConfig,
    pub(crate) management_token: Option<String>,
}


impl Wso2Client {
    /// Create a client against the local development endpoints
    pub fn new(admin: AdminAccount) -> Result<Wso2Client, Wso2Error> {
        Self::new_with_config(admin, ClientConfig::default())
    }


    /// Create a client with explicit base URLs and TLS settings
    pub fn new_with_config(
        admin: AdminAccount,
        config: ClientConfig,
    ) -> Result<Wso2Client, Wso2Error> {
        for base in [
            &config.identity_server_url,
            &config.api_manager_url,
            &config.gateway_url,
        ] {
            url::Url::parse(base)
                .map_err(|e| Wso2Error::Other(format!("invalid base URL '{base}': {e}")))?;
        }
        let mut builder = Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Wso2Client {
            http_client: builder.build()?,
            admin,
            config,
            management_token: None,
        })
    }


    pub fn base_url(&self, target: Target) -> &str {
        match target {
            Target::IdentityServer => &self.config.identity_server_url,
            Target::ApiManager => &self.config.api_manager_url,
            Target::Gateway => &self.config.gateway_url,
        }
    }


    pub fn admin(&self) -> &AdminAccount {
        &self.admin
    }


    /// Use an already issued token for the APIM management APIs
    pub fn set_management_token(&mut self, token: impl Into<String>) {
        self.management_token = Some(token.into());
    }


    pub fn management_token(&self) -> Option<&str> {
        self.management_token.as_deref()
    }


    pub(crate) fn management_credential(&self) -> Result<Credential, Wso2Error> {
        self.management_token
            .as_deref()
            .map(Credential::bearer)
            .ok_or_else(|| Wso2Error::Other(
                "no management token set; call authorize_management first".to_string(),
            ))
    }


    /// Issue one request with an explicit credential set
    pub async fn send<T>(
        &self,
        target: Target,
        method: Method,
        path: &str,
        credential: &Credential,
        json_body: Option<&T>,
    ) -> Result<(StatusCode, String), Wso2Error>
    where
        T: serde::Serialize + ?Sized,
    {
        helpers::send_json(
                &self.http_client,
                self.base_url(target),
                method,
                path,
                credential,
                json_body,
            )
            .await
    }


    /// Form-encoded POST with an explicit credential set
    pub async fn send_form(
        &self,
        target: Target,
        path: &str,
        credential: &Credential,
        form: &[(&str, &str)],
    ) -> Result<(StatusCode, String), Wso2Error> {
        helpers::send_form(&self.http_client, self.base_url(target), path, credential, form).await
    }


    /// Wrapper for admin (Basic) requests against the Identity Server
    pub async fn admin_request<T>(
        &self,
        method: Method,
        path: &str,
        json_body: Option<&T>,
    ) -> Result<(StatusCode, String), Wso2Error>
    where
        T: serde::Serialize + ?Sized,
    {
        let credential = self.admin.basic();
        self.send(Target::IdentityServer, method, path, &credential, json_body).await
    }


    /// Wrapper for Bearer requests against the APIM management APIs
    pub async fn management_request<T>(
        &self,
        method: Method,
        path: &str,
        json_body: Option<&T>,
    ) -> Result<(StatusCode, String), Wso2Error>
    where
        T: serde::Serialize + ?Sized,
    {
        let credential = self.management_credential()?;
        self.send(Target::ApiManager, method, path, &credential, json_body).await
    }
}
