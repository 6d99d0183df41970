//! Show one campaign

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use galang::{Catalog, DonationConnector};

/// Arguments for the campaign detail
#[derive(Args, Debug)]
pub struct CampaignSubCommand {
    /// Campaign id
    campaign_id: String,
}

/// Print a campaign with its bank and fund-usage entries.
pub async fn campaign(
    connector: Arc<dyn DonationConnector>,
    sub_command_args: &CampaignSubCommand,
) -> Result<()> {
    let catalog = Catalog::new(connector);
    let detail = catalog.detail(&sub_command_args.campaign_id).await?;

    println!("{}", detail.summary.name);
    if let Some(description) = &detail.summary.description {
        println!("{description}");
    }
    println!(
        "Terkumpul {} dari target {} ({:.0}%)",
        detail.summary.current_fund.to_rupiah(),
        detail.summary.total_fund.to_rupiah(),
        detail.summary.progress_percent()
    );
    if let Some(funders) = detail.summary.funder_count {
        println!("{funders} donatur, {} hari lagi", detail.summary.days_left());
    }

    if let Some(bank) = &detail.bank {
        println!(
            "Rekening: {} {} a.n. {}",
            bank.bank_name, bank.account_number, bank.name
        );
    }

    if !detail.fund_usages.is_empty() {
        println!("Rencana penggunaan dana:");
        for usage in &detail.fund_usages {
            println!("  {}  {}", usage.amount.to_rupiah(), usage.title);
        }
    }

    Ok(())
}
