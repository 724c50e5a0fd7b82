use async_trait::async_trait;
use thiserror::Error;

use super::DeviceReading;
use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn from_config() -> Credentials {
        return Credentials {
            email: Config::get(ConfigKey::Email),
            password: Config::get(ConfigKey::Password),
        };
    }

    pub fn is_configured(&self) -> bool {
        return !self.email.is_empty() && !self.password.is_empty();
    }
}

/// Bearer token handed out by the login endpoint. It carries no expiry, the
/// cloud simply starts answering 401 once it goes stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: &str) -> SessionToken {
        return SessionToken(token.to_string());
    }

    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the cloud rejected the session token")]
    Unauthorized,
    #[error("the cloud answered with status {status}")]
    Status { status: u16 },
    #[error("the cloud answered with a body that could not be parsed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("the request could not be completed: {0}")]
    Request(#[from] reqwest::Error),
}

#[async_trait]
pub trait CloudApi {
    /// Exchanges account credentials for a session token. Any non-200 answer
    /// is a failure, there is no retry at this layer.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, ApiError>;

    /// Fetches the full device list for the account. A 401 maps to
    /// [`ApiError::Unauthorized`] so callers can re-authenticate.
    async fn fetch_devices(&self, token: &str) -> Result<Vec<DeviceReading>, ApiError>;
}
