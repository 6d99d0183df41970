//! Donation wire types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bank::BankAccount;
use crate::Amount;

/// Payload for `POST /api/donations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDonationRequest {
    /// Campaign the donation belongs to
    pub campaign_id: String,
    /// Pledged amount
    pub amount: Amount,
    /// Donor name
    pub name: String,
    /// Donor email
    pub email: String,
    /// Donor WhatsApp number
    pub phone_number: String,
    /// Optional prayer or message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doa: Option<String>,
    /// Selected receiving account
    pub bank_id: String,
}

/// Payload returned by a successful donation creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationCreated {
    /// Identifier issued by the service
    pub donation_id: String,
}

/// Verification status of a donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DonationStatus {
    /// Created, transfer not yet confirmed
    Pending,
    /// Proof uploaded, awaiting verification
    Confirmed,
    /// Verified by the platform
    Verified,
    /// Rejected by the platform
    Rejected,
    /// Any status word this client does not know
    Other(String),
}

impl From<String> for DonationStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "confirmed" => Self::Confirmed,
            "verified" => Self::Verified,
            "rejected" => Self::Rejected,
            _ => Self::Other(value),
        }
    }
}

impl From<DonationStatus> for String {
    fn from(value: DonationStatus) -> Self {
        value.to_string()
    }
}

impl FromStr for DonationStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Verified => write!(f, "verified"),
            Self::Rejected => write!(f, "rejected"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Donation record from `GET /api/donations/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationDetail {
    /// Donation id
    pub id: String,
    /// Current verification status
    pub status: DonationStatus,
    /// Transaction number assigned by the platform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_number: Option<String>,
    /// Pledged amount
    pub amount: Amount,
    /// Receiving account the transfer was directed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
}
