//! List receiving accounts

use std::sync::Arc;

use anyhow::Result;
use galang::{BankDirectory, DonationConnector};

/// Print the eligible receiving accounts.
pub async fn banks(connector: Arc<dyn DonationConnector>) -> Result<()> {
    let directory = BankDirectory::new(connector);
    let banks = directory.list().await?;

    if banks.is_empty() {
        println!("No receiving accounts available");
        return Ok(());
    }

    for bank in banks {
        println!(
            "{}  {} {} a.n. {}",
            bank.id, bank.bank_name, bank.account_number, bank.name
        );
    }

    Ok(())
}
