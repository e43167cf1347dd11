use reqwest::StatusCode;
use std::fmt;

#[derive(Debug)]
pub enum Wso2Error {
    /// Transport or connectivity failure; no response was received.
    RequestError(reqwest::Error),
    /// The vendor answered with a non-2xx status.
    Http { status: StatusCode, body: String },
    /// A field the next step depends on is absent or empty.
    MissingField(String),
    ParseError(serde_json::Error),
    IoError(std::io::Error),
    Other(String),
}

impl Wso2Error {
    /// Status code of a vendor rejection, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Wso2Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the vendor refused a create because the resource is already there.
    ///
    /// SCIM2 and the APIM admin API answer 409; some APIM versions answer 400
    /// with an "already exists" description instead.
    pub fn is_already_exists(&self) -> bool {
        match self {
            Wso2Error::Http { status, body } => {
                *status == StatusCode::CONFLICT
                    || body.to_ascii_lowercase().contains("already exist")
            }
            _ => false,
        }
    }
}

impl fmt::Display for Wso2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wso2Error::RequestError(e) => write!(f, "Request error: {}", e),
            Wso2Error::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            Wso2Error::MissingField(path) => write!(f, "Missing field in response: {}", path),
            Wso2Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Wso2Error::IoError(e) => write!(f, "IO error: {}", e),
            Wso2Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Wso2Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Wso2Error::RequestError(e) => Some(e),
            Wso2Error::ParseError(e) => Some(e),
            Wso2Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Wso2Error {
    fn from(err: reqwest::Error) -> Self {
        Wso2Error::RequestError(err)
    }
}

impl From<serde_json::Error> for Wso2Error {
    fn from(err: serde_json::Error) -> Self {
        Wso2Error::ParseError(err)
    }
}

impl From<std::io::Error> for Wso2Error {
    fn from(err: std::io::Error) -> Self {
        Wso2Error::IoError(err)
    }
}

impl From<String> for Wso2Error {
    fn from(s: String) -> Wso2Error {
        Wso2Error::Other(s)
    }
}
