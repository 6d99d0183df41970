//! Client configuration
//!
//! Host and API key are required before any network attempt is made. They
//! are carried in an explicitly constructed [`ApiConfig`] handed to the
//! client at startup, never read from the environment per call.

use std::env;
use std::str::FromStr;

use galang_types::ApiUrl;

use crate::error::Error;

/// Environment variable holding the API base host.
pub const ENV_API_HOST: &str = "GALANG_API_HOST";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GALANG_API_KEY";

/// Configuration for the API gateway client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base host of the donation platform API
    pub host: ApiUrl,
    /// Caller API key, sent as the `api-key` header on every request
    pub api_key: String,
}

impl ApiConfig {
    /// Create a config from a host string and key.
    pub fn new(host: &str, api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Ok(Self {
            host: ApiUrl::from_str(host)?,
            api_key,
        })
    }

    /// Create a config from optional parts, failing on whichever is absent.
    pub fn from_parts(host: Option<&str>, api_key: Option<&str>) -> Result<Self, Error> {
        let host = host.ok_or(Error::MissingApiHost)?;
        let api_key = api_key.ok_or(Error::MissingApiKey)?;
        Self::new(host, api_key)
    }

    /// Read the config from `GALANG_API_HOST` and `GALANG_API_KEY`.
    pub fn from_env() -> Result<Self, Error> {
        let host = env::var(ENV_API_HOST).ok();
        let api_key = env::var(ENV_API_KEY).ok();
        Self::from_parts(host.as_deref(), api_key.as_deref())
    }
}
