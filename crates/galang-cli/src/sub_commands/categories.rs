//! List categories

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use galang::{Catalog, DonationConnector};

/// Arguments for the category lookup
#[derive(Args, Debug)]
pub struct CategoriesSubCommand {
    /// List the sub-categories of this category instead
    #[arg(long)]
    category_id: Option<String>,
}

/// Print the categories, or the sub-categories of one category.
pub async fn categories(
    connector: Arc<dyn DonationConnector>,
    sub_command_args: &CategoriesSubCommand,
) -> Result<()> {
    let catalog = Catalog::new(connector);

    match &sub_command_args.category_id {
        Some(category_id) => {
            for sub_category in catalog.sub_categories(category_id).await? {
                println!("{}  {}", sub_category.id, sub_category.name);
            }
        }
        None => {
            for category in catalog.categories().await? {
                println!("{}  {}", category.id, category.name);
            }
        }
    }

    Ok(())
}
