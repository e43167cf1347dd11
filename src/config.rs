use anyhow::{Context, Result, bail};
use std::time::Duration;

use wso2_rs::{AdminAccount, ClientConfig};

/// Connection and default settings for one CLI run.
///
/// Built once from the environment (after `.env` is loaded) and passed by
/// reference to every command.
#[derive(Debug, Clone)]
pub struct Config {
    // Base URLs as seen from the operator's machine.
    pub is_url: String,
    pub am_url: String,
    pub gateway_url: String,

    // IS as APIM reaches it when validating tokens (compose-internal name).
    pub is_internal_url: String,

    pub admin: AdminAccount,

    pub key_manager_name: String,
    pub key_manager_type: String,

    pub gateway_env: String,
    pub gateway_vhost: String,

    pub default_tier: String,
    pub callback_url: String,

    pub truststore: String,
    pub truststore_password: String,

    pub insecure_tls: bool,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str, default: &str| -> String {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let is_host = get("WSO2_IS_HOST", "localhost");
        let is_port = parse_port("WSO2_IS_PORT", &get("WSO2_IS_PORT", "9444"))?;
        let am_host = get("WSO2_AM_HOST", "localhost");
        let am_port = parse_port("WSO2_AM_PORT", &get("WSO2_AM_PORT", "9443"))?;
        let gw_host = get("WSO2_GATEWAY_HOST", &am_host);
        let gw_port = parse_port("WSO2_GATEWAY_PORT", &get("WSO2_GATEWAY_PORT", "8243"))?;

        let is_url = format!("https://{is_host}:{is_port}");
        let is_internal_url = get("WSO2_IS_INTERNAL_URL", &is_url);

        let timeout = match lookup("WSO2_HTTP_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(Duration::from_secs(
                raw.trim()
                    .parse()
                    .with_context(|| format!("WSO2_HTTP_TIMEOUT_SECS is not a number: {raw}"))?,
            )),
            None => None,
        };

        Ok(Self {
            is_url,
            am_url: format!("https://{am_host}:{am_port}"),
            gateway_url: format!("https://{gw_host}:{gw_port}"),
            is_internal_url,
            admin: AdminAccount::new(
                get("WSO2_ADMIN_USERNAME", "admin"),
                get("WSO2_ADMIN_PASSWORD", "admin"),
            ),
            key_manager_name: get("WSO2_KEY_MANAGER_NAME", "WSO2-IS"),
            key_manager_type: get("WSO2_KEY_MANAGER_TYPE", "WSO2-IS"),
            gateway_env: get("WSO2_GATEWAY_ENV", "Default"),
            gateway_vhost: get("WSO2_GATEWAY_VHOST", "localhost"),
            default_tier: get("WSO2_DEFAULT_TIER", "Unlimited"),
            callback_url: get("WSO2_CALLBACK_URL", "http://localhost:8080/callback"),
            truststore: get("WSO2_TRUSTSTORE", "client-truststore.jks"),
            truststore_password: get("WSO2_TRUSTSTORE_PASSWORD", "wso2carbon"),
            insecure_tls: parse_bool("WSO2_INSECURE_TLS", &get("WSO2_INSECURE_TLS", "true"))?,
            timeout,
        })
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            identity_server_url: self.is_url.clone(),
            api_manager_url: self.am_url.clone(),
            gateway_url: self.gateway_url.clone(),
            accept_invalid_certs: self.insecure_tls,
            timeout: self.timeout,
        }
    }
}

fn parse_port(name: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .with_context(|| format!("{name} is not a valid port: {raw}"))
}

fn parse_bool(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => bail!("{name} is not a boolean: {raw}"),
    }
}
