//! API base URL

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::{ParseError, Url};

/// Url Error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Url error
    #[error(transparent)]
    Url(#[from] ParseError),
    /// Invalid URL structure
    #[error("Invalid URL")]
    InvalidUrl,
}

/// Normalized base URL of the donation platform API.
///
/// Scheme and host are lowercased and trailing slashes trimmed, so two
/// spellings of the same host compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiUrl(String);

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl ApiUrl {
    fn normalize(url: &str) -> Result<String, Error> {
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let (scheme, rest) = trimmed.split_once("://").ok_or(Error::InvalidUrl)?;
        let (host, path) = match rest.split_once('/') {
            Some((host, path)) => (host, Some(path)),
            None => (rest, None),
        };
        if host.is_empty() {
            return Err(Error::InvalidUrl);
        }

        let mut normalized = format!("{}://{}", scheme.to_lowercase(), host.to_lowercase());
        if let Some(path) = path {
            normalized.push('/');
            normalized.push_str(path);
        }
        Ok(normalized)
    }

    /// Append path elements onto the URL.
    pub fn join_paths(&self, path_elements: &[&str]) -> Result<Url, Error> {
        let mut url = Url::parse(&self.0)?;

        let joined = path_elements.join("/");
        let path = match url.path().trim_end_matches('/') {
            "" => format!("/{joined}"),
            base => format!("{base}/{joined}"),
        };
        url.set_path(&path);
        Ok(url)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Self::normalize(url).map(Self)
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
