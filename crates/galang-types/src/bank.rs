//! Receiving accounts

use serde::{Deserialize, Serialize};

use crate::sanitize::{clean_field, Sanitize};

/// A bank account eligible to receive transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Account id
    pub id: String,
    /// Account holder name
    pub name: String,
    /// Bank name, e.g. "BCA"
    pub bank_name: String,
    /// Account number donors transfer to
    pub account_number: String,
    /// Logo path (may be relative)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Fully qualified logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl BankAccount {
    /// Logo to display, preferring the fully qualified URL.
    pub fn display_logo(&self) -> Option<&str> {
        self.icon_url.as_deref().or(self.logo.as_deref())
    }
}

impl Sanitize for BankAccount {
    fn sanitize(&mut self) {
        clean_field(&mut self.logo);
        clean_field(&mut self.icon_url);
    }
}
