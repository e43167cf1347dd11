use crate::auth::Credential;
use crate::errors::Wso2Error;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
/// Helper functions for issuing one authenticated request against a vendor base URL


/// Join a base URL and an absolute path without doubling the slash
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}


/// Append serialized query params, only adding '?' when there are any
pub(crate) fn with_query<Q>(path: &str, params: &Q) -> Result<String, Wso2Error>
where
    Q: serde::Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(params)
        .map_err(|e| Wso2Error::Other(format!("Failed to serialize params: {}", e)))?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}


/// Send a request with an optional JSON body
pub(crate) async fn send_json<T>(
    http_client: &Client,
    base_url: &str,
    method: Method,
    path: &str,
    credential: &Credential,
    json_body: Option<&T>,
) -> Result<(StatusCode, String), Wso2Error>
where
    T: serde::Serialize + ?Sized,
{
    let url = join_url(base_url, path);
    let mut request = http_client
        .request(method.clone(), &url)
        .header("Authorization", credential.authorization_header())
        .header("Accept", "application/json");
    if let Some(body) = json_body {
        request = request.json(body);
    }
    dispatch(request, &method, &url, credential).await
}


/// Send a form-encoded POST, as the OAuth2 token endpoint expects
pub(crate) async fn send_form(
    http_client: &Client,
    base_url: &str,
    path: &str,
    credential: &Credential,
    form: &[(&str, &str)],
) -> Result<(StatusCode, String), Wso2Error> {
    let url = join_url(base_url, path);
    let request = http_client
        .post(&url)
        .header("Authorization", credential.authorization_header())
        .header("Accept", "application/json")
        .form(form);
    dispatch(request, &Method::POST, &url, credential).await
}


async fn dispatch(
    request: RequestBuilder,
    method: &Method,
    url: &str,
    credential: &Credential,
) -> Result<(StatusCode, String), Wso2Error> {
    debug!(%method, url, auth = credential.scheme(), "sending request");
    let resp = request.send().await?;
    let status = resp.status();
    let body = resp.text().await?;
    debug!(%method, url, status = status.as_u16(), "received response");
    if !status.is_success() {
        return Err(Wso2Error::Http { status, body });
    }
    Ok((status, body))
}


/// Deserialize a response body; the raw body goes to the debug log on failure
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Wso2Error> {
    serde_json::from_str(body).map_err(|e| {
        debug!(body, "unexpected response payload");
        Wso2Error::ParseError(e)
    })
}
