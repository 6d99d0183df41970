//! List campaigns

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use galang::{CampaignQuery, Catalog, DonationConnector};

/// Arguments for the campaign list
#[derive(Args, Debug)]
pub struct CampaignsSubCommand {
    /// Page number
    #[arg(long, default_value = "1")]
    page: u32,
    /// Page size
    #[arg(long, default_value = "10")]
    limit: u32,
    /// Restrict to one category
    #[arg(long)]
    category_id: Option<String>,
    /// Restrict to one sub-category (requires a category)
    #[arg(long, requires = "category_id")]
    sub_category_id: Option<String>,
}

/// Print one page of campaign summaries.
pub async fn campaigns(
    connector: Arc<dyn DonationConnector>,
    sub_command_args: &CampaignsSubCommand,
) -> Result<()> {
    let catalog = Catalog::new(connector);
    let query = CampaignQuery {
        page: sub_command_args.page,
        limit: sub_command_args.limit,
        category_id: sub_command_args.category_id.clone(),
        sub_category_id: sub_command_args.sub_category_id.clone(),
    };

    let campaigns = catalog.list(&query).await?;
    if campaigns.is_empty() {
        println!("No campaigns on page {}", sub_command_args.page);
        return Ok(());
    }

    for campaign in campaigns {
        println!("{}  {}", campaign.id, campaign.name);
        println!(
            "    {} of {} ({:.0}%), {} hari lagi",
            campaign.current_fund.to_rupiah(),
            campaign.total_fund.to_rupiah(),
            campaign.progress_percent(),
            campaign.days_left()
        );
    }

    Ok(())
}
