//! Campaign catalog
//!
//! Read-only access to campaign lists, campaign detail and the category
//! lookups. Results come back in server order and are fetched fresh per
//! page instance; nothing is cached across instances.

use std::sync::Arc;

use galang_types::{CampaignDetail, CampaignSummary, Category, SubCategory};

use crate::connector::{CampaignQuery, DonationConnector};
use crate::error::Error;

/// Campaign catalog provider.
#[derive(Debug, Clone)]
pub struct Catalog {
    connector: Arc<dyn DonationConnector>,
}

impl Catalog {
    /// Create a catalog over a connector.
    pub fn new(connector: Arc<dyn DonationConnector>) -> Self {
        Self { connector }
    }

    /// List campaign summaries for one page, optionally filtered.
    pub async fn list(&self, query: &CampaignQuery) -> Result<Vec<CampaignSummary>, Error> {
        self.connector.get_campaigns(query).await
    }

    /// Fetch one campaign with its bank and fund-usage entries.
    pub async fn detail(&self, campaign_id: &str) -> Result<CampaignDetail, Error> {
        self.connector.get_campaign(campaign_id).await
    }

    /// List campaign categories.
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        self.connector.get_categories().await
    }

    /// List the sub-categories of one category.
    pub async fn sub_categories(&self, category_id: &str) -> Result<Vec<SubCategory>, Error> {
        self.connector.get_sub_categories(category_id).await
    }
}

/// Category/sub-category selection for the campaign list.
///
/// A sub-category only makes sense under its category, so changing the
/// category clears any sub-category selection; callers re-fetch the
/// sub-category list for the new category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    category_id: Option<String>,
    sub_category_id: Option<String>,
}

impl CategoryFilter {
    /// No filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category (or none), clearing the sub-category selection.
    pub fn select_category(&mut self, category_id: Option<String>) {
        self.category_id = category_id;
        self.sub_category_id = None;
    }

    /// Select a sub-category under the current category.
    pub fn select_sub_category(&mut self, sub_category_id: Option<String>) -> Result<(), Error> {
        if sub_category_id.is_some() && self.category_id.is_none() {
            return Err(Error::Custom(
                "A sub-category requires a category selection".to_string(),
            ));
        }
        self.sub_category_id = sub_category_id;
        Ok(())
    }

    /// Currently selected category.
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Currently selected sub-category.
    pub fn sub_category_id(&self) -> Option<&str> {
        self.sub_category_id.as_deref()
    }

    /// Apply the selection to a list query.
    pub fn apply(&self, query: &mut CampaignQuery) {
        query.category_id = self.category_id.clone();
        query.sub_category_id = self.sub_category_id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_change_clears_sub_category() {
        let mut filter = CategoryFilter::new();
        filter.select_category(Some("c1".to_string()));
        filter
            .select_sub_category(Some("s1".to_string()))
            .expect("category is selected");
        assert_eq!(filter.sub_category_id(), Some("s1"));

        filter.select_category(Some("c2".to_string()));
        assert_eq!(filter.category_id(), Some("c2"));
        assert_eq!(filter.sub_category_id(), None);

        filter.select_category(None);
        assert_eq!(filter.sub_category_id(), None);
    }

    #[test]
    fn test_sub_category_requires_category() {
        let mut filter = CategoryFilter::new();
        assert!(filter.select_sub_category(Some("s1".to_string())).is_err());
        assert!(filter.select_sub_category(None).is_ok());
    }

    #[test]
    fn test_apply_to_query() {
        let mut filter = CategoryFilter::new();
        filter.select_category(Some("c1".to_string()));

        let mut query = CampaignQuery::page(2);
        filter.apply(&mut query);
        assert_eq!(query.category_id.as_deref(), Some("c1"));
        assert_eq!(query.sub_category_id, None);
        assert_eq!(query.page, 2);
    }
}
