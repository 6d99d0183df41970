//! API connector
//!
//! [`DonationConnector`] is the seam between the providers/workflow and the
//! remote service. Production code uses [`http_client::HttpClient`]; tests
//! substitute fakes.

use std::fmt::Debug;

use async_trait::async_trait;
use galang_types::{
    BankAccount, CampaignDetail, CampaignSummary, Category, CreateDonationRequest,
    DonationCreated, DonationDetail, SubCategory,
};

use crate::error::Error;
use crate::workflow::proof::ProofOfPayment;

pub mod http_client;

/// Multipart field name the receipt image is uploaded under.
pub const RECEIPT_FIELD: &str = "receipt_file";

/// Query parameters for the campaign list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignQuery {
    /// Page number, starting at 1
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Restrict to one category
    pub category_id: Option<String>,
    /// Restrict to one sub-category
    pub sub_category_id: Option<String>,
}

impl Default for CampaignQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            category_id: None,
            sub_category_id: None,
        }
    }
}

impl CampaignQuery {
    /// Query for one page with the default page size.
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }
}

/// Interface that connects this client to the donation platform API.
#[async_trait]
pub trait DonationConnector: Debug + Send + Sync {
    /// List campaign summaries, in server order.
    async fn get_campaigns(&self, query: &CampaignQuery) -> Result<Vec<CampaignSummary>, Error>;
    /// Fetch one campaign with its bank and fund-usage entries.
    async fn get_campaign(&self, campaign_id: &str) -> Result<CampaignDetail, Error>;
    /// List eligible receiving accounts.
    async fn get_banks(&self) -> Result<Vec<BankAccount>, Error>;
    /// List campaign categories.
    async fn get_categories(&self) -> Result<Vec<Category>, Error>;
    /// List sub-categories of one category.
    async fn get_sub_categories(&self, category_id: &str) -> Result<Vec<SubCategory>, Error>;
    /// Create a donation, returning the identifier issued by the service.
    async fn post_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<DonationCreated, Error>;
    /// Upload the proof-of-payment image for a created donation.
    async fn post_receipt(&self, donation_id: &str, proof: &ProofOfPayment)
        -> Result<(), Error>;
    /// Fetch the donation record for a previously created donation.
    async fn get_donation(&self, donation_id: &str) -> Result<DonationDetail, Error>;
}
