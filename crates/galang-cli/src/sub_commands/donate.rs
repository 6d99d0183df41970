//! Run the donation flow

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use galang::{Catalog, DonationConnector, DonationWorkflow, ProofOfPayment};

/// Arguments for the donate flow
#[derive(Args, Debug)]
pub struct DonateSubCommand {
    /// Campaign id
    campaign_id: String,
    /// Donor name
    #[arg(long)]
    name: String,
    /// Donor email
    #[arg(long)]
    email: String,
    /// Donor WhatsApp number
    #[arg(long)]
    whatsapp: String,
    /// Amount in Rupiah; formatting like "Rp 50.000" is accepted
    #[arg(long)]
    amount: String,
    /// Optional prayer or message
    #[arg(long)]
    doa: Option<String>,
    /// Receiving account id; the first listed account is used when omitted
    #[arg(long)]
    bank_id: Option<String>,
    /// Path to the transfer receipt image
    #[arg(long)]
    receipt: PathBuf,
}

/// Drive the whole donation flow: intake, creation, receipt upload.
pub async fn donate(
    connector: Arc<dyn DonationConnector>,
    sub_command_args: &DonateSubCommand,
) -> Result<()> {
    let catalog = Catalog::new(connector.clone());
    let campaign = catalog.detail(&sub_command_args.campaign_id).await?;

    let mut workflow = DonationWorkflow::new(
        connector,
        campaign.summary.id.clone(),
        campaign.summary.name.clone(),
    );

    let intake = workflow.intake_mut();
    intake.set_name(sub_command_args.name.as_str());
    intake.set_whatsapp(sub_command_args.whatsapp.as_str());
    intake.set_email(sub_command_args.email.as_str());
    if let Some(doa) = &sub_command_args.doa {
        intake.set_doa(doa.as_str());
    }
    intake.set_custom_amount(sub_command_args.amount.as_str());

    workflow.submit_intake()?;
    println!(
        "Donating {} to \"{}\"",
        workflow.intake().amount().to_rupiah(),
        campaign.summary.name
    );

    workflow.load_banks().await?;
    if let Some(bank_id) = &sub_command_args.bank_id {
        workflow.select_bank(bank_id)?;
    }
    let bank = workflow
        .selected_bank()
        .context("no receiving account available")?;
    println!(
        "Transfer to {} {} a.n. {}",
        bank.bank_name, bank.account_number, bank.name
    );

    let donation_id = workflow.create_donation().await?;
    println!("Donation created: {donation_id}");

    let bytes = fs::read(&sub_command_args.receipt)
        .with_context(|| format!("reading {}", sub_command_args.receipt.display()))?;
    let file_name = sub_command_args
        .receipt
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "receipt".to_string());
    let proof = ProofOfPayment::from_bytes(file_name, bytes)?;

    workflow.attach_proof(proof)?;
    workflow.confirm_receipt().await?;

    println!("Donation {donation_id} confirmed, terima kasih!");
    if let Some(share) = workflow.share_url() {
        println!("Share: {share}");
    }

    Ok(())
}
