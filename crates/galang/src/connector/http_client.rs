//! Reqwest implementation of the connector

use async_trait::async_trait;
use galang_types::{
    BankAccount, CampaignDetail, CampaignSummary, Category, CreateDonationRequest,
    DonationCreated, DonationDetail, Envelope, Sanitize, SubCategory,
};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;
use url::Url;

use super::{CampaignQuery, DonationConnector, RECEIPT_FIELD};
use crate::config::ApiConfig;
use crate::error::Error;
use crate::workflow::proof::ProofOfPayment;

/// Header carrying the caller API key.
const API_KEY_HEADER: &str = "api-key";

/// Http Client
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Create a new [`HttpClient`] for the configured host.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            inner: reqwest::Client::new(),
            config,
        }
    }

    /// The configured base host.
    pub fn host(&self) -> &galang_types::ApiUrl {
        &self.config.host
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        Ok(self.config.host.join_paths(segments)?)
    }

    async fn decode<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, Error> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.status().map(|s| s.as_u16()), e.to_string()))?;

        if !status.is_success() {
            return Err(Error::Http(Some(status.as_u16()), body));
        }

        let envelope: Envelope<R> = serde_json::from_str(&body).inspect_err(|err| {
            tracing::warn!("Undecodable response body: {}", err);
        })?;
        tracing::debug!(
            "Response meta: {} {}",
            envelope.meta.code,
            envelope.meta.status
        );
        Ok(envelope.data)
    }

    async fn http_get<R: DeserializeOwned>(&self, url: Url) -> Result<R, Error> {
        let response = self
            .inner
            .get(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .send()
            .await
            .map_err(|e| Error::Http(e.status().map(|s| s.as_u16()), e.to_string()))?;

        Self::decode(response).await
    }

    async fn http_post_json<P: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        url: Url,
        payload: &P,
    ) -> Result<R, Error> {
        let response = self
            .inner
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Http(e.status().map(|s| s.as_u16()), e.to_string()))?;

        Self::decode(response).await
    }

    // Content-type stays unset here so reqwest computes the multipart
    // boundary itself.
    async fn http_post_multipart(&self, url: Url, form: Form) -> Result<(), Error> {
        let response = self
            .inner
            .post(url)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Http(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| Error::Http(e.status().map(|s| s.as_u16()), e.to_string()))?;
            return Err(Error::Http(Some(status.as_u16()), body));
        }
        Ok(())
    }
}

#[async_trait]
impl DonationConnector for HttpClient {
    #[instrument(skip(self))]
    async fn get_campaigns(&self, query: &CampaignQuery) -> Result<Vec<CampaignSummary>, Error> {
        if query.page == 0 {
            return Err(Error::InvalidPage);
        }

        let mut url = self.endpoint(&["api", "campaigns"])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(category_id) = &query.category_id {
                pairs.append_pair("category_id", category_id);
            }
            if let Some(sub_category_id) = &query.sub_category_id {
                pairs.append_pair("sub_category_id", sub_category_id);
            }
        }

        let campaigns: Vec<CampaignSummary> = self.http_get(url).await?;
        Ok(campaigns.into_iter().map(Sanitize::sanitized).collect())
    }

    #[instrument(skip(self))]
    async fn get_campaign(&self, campaign_id: &str) -> Result<CampaignDetail, Error> {
        let url = self.endpoint(&["api", "campaigns", campaign_id])?;
        let detail: CampaignDetail = self.http_get(url).await?;
        Ok(detail.sanitized())
    }

    #[instrument(skip(self))]
    async fn get_banks(&self) -> Result<Vec<BankAccount>, Error> {
        let url = self.endpoint(&["api", "banks"])?;
        let banks: Vec<BankAccount> = self.http_get(url).await?;
        Ok(banks.into_iter().map(Sanitize::sanitized).collect())
    }

    #[instrument(skip(self))]
    async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        let url = self.endpoint(&["api", "categories"])?;
        self.http_get(url).await
    }

    #[instrument(skip(self))]
    async fn get_sub_categories(&self, category_id: &str) -> Result<Vec<SubCategory>, Error> {
        let mut url = self.endpoint(&["api", "new-sub-categories"])?;
        url.query_pairs_mut()
            .append_pair("category_id", category_id);
        self.http_get(url).await
    }

    #[instrument(skip_all, fields(campaign_id = %request.campaign_id))]
    async fn post_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<DonationCreated, Error> {
        let url = self.endpoint(&["api", "donations"])?;
        self.http_post_json(url, request).await
    }

    #[instrument(skip(self, proof))]
    async fn post_receipt(
        &self,
        donation_id: &str,
        proof: &ProofOfPayment,
    ) -> Result<(), Error> {
        let url = self.endpoint(&["api", "donations", donation_id])?;

        let part = Part::bytes(proof.bytes().to_vec())
            .file_name(proof.file_name().to_string())
            .mime_str(proof.content_type())
            .map_err(|e| Error::Http(None, e.to_string()))?;
        let form = Form::new().part(RECEIPT_FIELD, part);

        self.http_post_multipart(url, form).await
    }

    #[instrument(skip(self))]
    async fn get_donation(&self, donation_id: &str) -> Result<DonationDetail, Error> {
        let url = self.endpoint(&["api", "donations", donation_id])?;
        self.http_get(url).await
    }
}
