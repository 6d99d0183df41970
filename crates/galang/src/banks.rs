//! Bank directory
//!
//! Read-only lookup of the receiving accounts a donor may transfer to.
//! Selection state belongs to the workflow, not to this provider.

use std::sync::Arc;

use galang_types::BankAccount;

use crate::connector::DonationConnector;
use crate::error::Error;

/// Receiving-account directory provider.
#[derive(Debug, Clone)]
pub struct BankDirectory {
    connector: Arc<dyn DonationConnector>,
}

impl BankDirectory {
    /// Create a directory over a connector.
    pub fn new(connector: Arc<dyn DonationConnector>) -> Self {
        Self { connector }
    }

    /// List the eligible receiving accounts.
    pub async fn list(&self) -> Result<Vec<BankAccount>, Error> {
        self.connector.get_banks().await
    }
}
