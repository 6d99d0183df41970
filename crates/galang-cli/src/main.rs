//! Command line client for the galang donation platform.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use galang::{ApiConfig, DonationConnector, HttpClient};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod sub_commands;

/// Browse campaigns and donate from the terminal
#[derive(Parser)]
#[command(name = "galang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API base host
    #[arg(long, env = "GALANG_API_HOST")]
    host: Option<String>,
    /// API key
    #[arg(long, env = "GALANG_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Logging level
    #[arg(short, long, default_value = "error")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List campaigns
    Campaigns(sub_commands::campaigns::CampaignsSubCommand),
    /// Show one campaign
    Campaign(sub_commands::campaign::CampaignSubCommand),
    /// List receiving accounts
    Banks,
    /// List categories or the sub-categories of one category
    Categories(sub_commands::categories::CategoriesSubCommand),
    /// Run the donation flow for a campaign
    Donate(sub_commands::donate::DonateSubCommand),
    /// Show the status of a donation
    Donation(sub_commands::donation::DonationSubCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Cli = Cli::parse();

    let env_filter = EnvFilter::new(args.log_level.to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ApiConfig::from_parts(args.host.as_deref(), args.api_key.as_deref())?;
    let connector: Arc<dyn DonationConnector> = Arc::new(HttpClient::new(config));

    match args.command {
        Commands::Campaigns(sub_command_args) => {
            sub_commands::campaigns::campaigns(connector, &sub_command_args).await
        }
        Commands::Campaign(sub_command_args) => {
            sub_commands::campaign::campaign(connector, &sub_command_args).await
        }
        Commands::Banks => sub_commands::banks::banks(connector).await,
        Commands::Categories(sub_command_args) => {
            sub_commands::categories::categories(connector, &sub_command_args).await
        }
        Commands::Donate(sub_command_args) => {
            sub_commands::donate::donate(connector, &sub_command_args).await
        }
        Commands::Donation(sub_command_args) => {
            sub_commands::donation::donation(connector, &sub_command_args).await
        }
    }
}
