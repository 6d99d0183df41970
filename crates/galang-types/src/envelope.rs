//! Response envelope
//!
//! Every API response shares the shape `{ meta: {...}, data: ... }`.

use serde::{Deserialize, Serialize};

/// Response metadata common to all endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Numeric status code echoed by the service
    pub code: i64,
    /// Status word, e.g. "success"
    pub status: String,
    /// Human readable message
    #[serde(default)]
    pub message: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
}

/// Envelope wrapping every response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Response metadata
    pub meta: Meta,
    /// Endpoint specific payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, discarding the metadata.
    pub fn into_data(self) -> T {
        self.data
    }
}
