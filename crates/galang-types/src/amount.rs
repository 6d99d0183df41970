//! Donation amounts
//!
//! Whole Rupiah, no minor unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Amount Error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid amount
    #[error("Invalid Amount: {0}")]
    InvalidAmount(String),
}

/// A donation amount in whole Rupiah.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Zero amount
    pub const ZERO: Amount = Amount(0);

    /// Inner value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse free text into an amount.
    ///
    /// Non-digit characters are stripped before parsing, so "Rp 50.000"
    /// resolves to 50000. Text without any digits resolves to zero.
    pub fn from_loose_str(text: &str) -> Amount {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        Amount(digits.parse().unwrap_or(0))
    }

    /// Format as Rupiah with dot grouping, e.g. `Rp 50.000`.
    pub fn to_rupiah(&self) -> String {
        let raw = self.0.to_string();
        let mut grouped = String::with_capacity(raw.len() + raw.len() / 3 + 3);
        for (i, c) in raw.chars().enumerate() {
            if i > 0 && (raw.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        format!("Rp {grouped}")
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Amount> for u64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<u64>()
            .map_err(|_| Error::InvalidAmount(s.to_owned()))?;
        Ok(Amount(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
