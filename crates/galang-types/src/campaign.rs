//! Campaign records

use serde::{Deserialize, Serialize};

use crate::bank::BankAccount;
use crate::sanitize::{clean_field, Sanitize};
use crate::Amount;

/// Fundraiser behind a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Raiser {
    /// Raiser id
    pub id: String,
    /// Display name
    pub name: String,
    /// Profile image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_img: Option<String>,
    /// Verification flag (0/1 from the service)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<i64>,
}

impl Sanitize for Raiser {
    fn sanitize(&mut self) {
        clean_field(&mut self.profile_img);
    }
}

/// Campaign summary as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSummary {
    /// Campaign id
    pub id: String,
    /// Campaign title
    pub name: String,
    /// Target amount
    pub total_fund: Amount,
    /// Collected amount
    pub current_fund: Amount,
    /// Fundraising start date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_fund: Option<String>,
    /// Fundraising end date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_fund: Option<String>,
    /// Hero image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_img: Option<String>,
    /// Campaign description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Days remaining
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_day_string: Option<i64>,
    /// Fundraiser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raiser: Option<Raiser>,
    /// Number of funders so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funder_count: Option<i64>,
}

impl CampaignSummary {
    /// Collected over target, as a percentage clamped to [0, 100].
    ///
    /// A campaign without a target reports zero progress.
    pub fn progress_percent(&self) -> f64 {
        if self.total_fund.is_zero() {
            return 0.0;
        }
        let ratio = self.current_fund.value() as f64 / self.total_fund.value() as f64;
        (ratio * 100.0).clamp(0.0, 100.0)
    }

    /// Days remaining, zero when the service omits it.
    pub fn days_left(&self) -> i64 {
        self.count_day_string.unwrap_or(0)
    }
}

impl Sanitize for CampaignSummary {
    fn sanitize(&mut self) {
        clean_field(&mut self.hero_img);
        clean_field(&mut self.description);
        if let Some(raiser) = &mut self.raiser {
            raiser.sanitize();
        }
    }
}

/// Planned allocation of the collected funds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundUsage {
    /// Usage entry id
    pub id: String,
    /// What the slice is spent on
    pub title: String,
    /// Allocated amount
    pub amount: Amount,
}

/// Full campaign record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDetail {
    /// Summary fields shared with the list endpoint
    #[serde(flatten)]
    pub summary: CampaignSummary,
    /// Receiving account attached to the campaign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<BankAccount>,
    /// Ordered fund-usage entries (server order preserved)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fund_usages: Vec<FundUsage>,
}

impl Sanitize for CampaignDetail {
    fn sanitize(&mut self) {
        self.summary.sanitize();
        if let Some(bank) = &mut self.bank {
            bank.sanitize();
        }
    }
}
