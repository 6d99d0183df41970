//! Show a donation

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use galang::DonationConnector;

/// Arguments for the donation lookup
#[derive(Args, Debug)]
pub struct DonationSubCommand {
    /// Donation id
    donation_id: String,
}

/// Print the status of a donation.
pub async fn donation(
    connector: Arc<dyn DonationConnector>,
    sub_command_args: &DonationSubCommand,
) -> Result<()> {
    let detail = connector.get_donation(&sub_command_args.donation_id).await?;

    println!("Donation {}", detail.id);
    println!("Status: {}", detail.status);
    println!("Amount: {}", detail.amount.to_rupiah());
    if let Some(transaction_number) = &detail.transaction_number {
        println!("Transaction: {transaction_number}");
    }
    if let Some(bank) = &detail.bank {
        println!(
            "Bank: {} {} a.n. {}",
            bank.bank_name, bank.account_number, bank.name
        );
    }

    Ok(())
}
