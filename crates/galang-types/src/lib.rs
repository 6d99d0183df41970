//! Shared types for the galang donation platform client.
//!
//! This crate is the base foundation for the crates that talk to the
//! donation platform API: the response envelope, the campaign, bank,
//! donation and category records, amount handling, and the string
//! sanitization applied at the provider boundary.

pub mod amount;
pub mod api_url;
pub mod bank;
pub mod campaign;
pub mod category;
pub mod donation;
pub mod envelope;
pub mod sanitize;

pub use self::amount::Amount;
pub use self::api_url::ApiUrl;
pub use self::bank::BankAccount;
pub use self::campaign::{CampaignDetail, CampaignSummary, FundUsage, Raiser};
pub use self::category::{Category, SubCategory};
pub use self::donation::{
    CreateDonationRequest, DonationCreated, DonationDetail, DonationStatus,
};
pub use self::envelope::{Envelope, Meta};
pub use self::sanitize::{strip_ticks_and_quotes, Sanitize};
