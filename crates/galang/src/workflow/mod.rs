//! Donation workflow
//!
//! The three-step donation flow: intake, payment selection against a
//! manually transferred bank account, then proof-of-payment upload. The
//! steps advance only forward, except that a completed workflow may re-open
//! the upload step to replace the receipt for the same donation.
//!
//! ```text
//! Intake
//!   └─ submit_intake() ────────> PaymentSelection
//!        └─ create_donation() ──> ProofUpload
//!             └─ confirm_receipt() ─> Completed
//!                  └─ redo_upload() ─> ProofUpload (same donation id)
//! ```
//!
//! Each network action keeps its own in-flight flag and last error; an
//! action refuses to start while its own flag is set, independent of the
//! other actions.

use std::sync::Arc;

use galang_types::{Amount, BankAccount, CreateDonationRequest};
use url::Url;

use crate::connector::DonationConnector;
use crate::error::Error;

pub mod intake;
pub mod proof;

use self::intake::IntakeForm;
use self::proof::ProofOfPayment;

/// Steps of the donation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    /// Collecting donor details and the amount
    Intake,
    /// Choosing the receiving account and creating the donation
    PaymentSelection,
    /// Uploading the transfer receipt
    ProofUpload,
    /// Receipt confirmed by the service
    Completed,
}

/// Loading/error flags of one async action.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    in_flight: bool,
    error: Option<String>,
}

impl ActionState {
    fn begin(&mut self) {
        self.in_flight = true;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.in_flight = false;
    }

    fn fail(&mut self, error: &Error) {
        self.in_flight = false;
        self.error = Some(error.to_string());
    }

    /// Whether the action is currently awaiting the service.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Message of the most recent failure, cleared on the next attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// One donor's pass through the donation flow for a single campaign.
///
/// The workflow owns the intake data, the bank selection and the pending
/// proof for its lifetime. The donation identifier is issued by the service
/// on creation and only copied here.
#[derive(Debug)]
pub struct DonationWorkflow {
    connector: Arc<dyn DonationConnector>,
    campaign_id: String,
    campaign_name: String,
    state: WorkflowState,
    intake: IntakeForm,
    banks: Vec<BankAccount>,
    selected_bank_id: Option<String>,
    proof: Option<ProofOfPayment>,
    donation_id: Option<String>,
    bank_fetch: ActionState,
    create: ActionState,
    confirm: ActionState,
}

impl DonationWorkflow {
    /// Start a new workflow for one campaign.
    pub fn new(
        connector: Arc<dyn DonationConnector>,
        campaign_id: impl Into<String>,
        campaign_name: impl Into<String>,
    ) -> Self {
        Self {
            connector,
            campaign_id: campaign_id.into(),
            campaign_name: campaign_name.into(),
            state: WorkflowState::Intake,
            intake: IntakeForm::new(),
            banks: Vec::new(),
            selected_bank_id: None,
            proof: None,
            donation_id: None,
            bank_fetch: ActionState::default(),
            create: ActionState::default(),
            confirm: ActionState::default(),
        }
    }

    /// Current step.
    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Campaign this workflow donates to.
    pub fn campaign_id(&self) -> &str {
        &self.campaign_id
    }

    /// The intake form.
    pub fn intake(&self) -> &IntakeForm {
        &self.intake
    }

    /// Mutable access to the intake form.
    pub fn intake_mut(&mut self) -> &mut IntakeForm {
        &mut self.intake
    }

    /// Validate the intake and advance to payment selection.
    ///
    /// On a failed guard the workflow stays at intake and the field-level
    /// error is returned.
    pub fn submit_intake(&mut self) -> Result<(), Error> {
        if self.state != WorkflowState::Intake {
            return Err(Error::StepMismatch(self.state));
        }
        self.intake.validate()?;
        tracing::debug!(
            "Intake complete for campaign {}, amount {}",
            self.campaign_id,
            self.intake.amount()
        );
        self.state = WorkflowState::PaymentSelection;
        Ok(())
    }

    /// Fetch the eligible receiving accounts.
    ///
    /// On a successful non-empty fetch the first account becomes the
    /// selected one; the donor may change it before creating the donation.
    pub async fn load_banks(&mut self) -> Result<&[BankAccount], Error> {
        if self.state != WorkflowState::PaymentSelection {
            return Err(Error::StepMismatch(self.state));
        }
        if self.bank_fetch.in_flight() {
            return Err(Error::InFlight("bank-list"));
        }

        self.bank_fetch.begin();
        match self.connector.get_banks().await {
            Ok(banks) => {
                self.bank_fetch.succeed();
                self.banks = banks;
                if self.selected_bank_id.is_none() {
                    self.selected_bank_id = self.banks.first().map(|bank| bank.id.clone());
                }
                Ok(&self.banks)
            }
            Err(error) => {
                tracing::warn!("Bank list fetch failed: {}", error);
                self.bank_fetch.fail(&error);
                Err(error)
            }
        }
    }

    /// Fetched receiving accounts.
    pub fn banks(&self) -> &[BankAccount] {
        &self.banks
    }

    /// Select one of the fetched receiving accounts.
    pub fn select_bank(&mut self, bank_id: &str) -> Result<(), Error> {
        if self.state != WorkflowState::PaymentSelection {
            return Err(Error::StepMismatch(self.state));
        }
        if !self.banks.iter().any(|bank| bank.id == bank_id) {
            return Err(Error::UnknownBank(bank_id.to_string()));
        }
        self.selected_bank_id = Some(bank_id.to_string());
        Ok(())
    }

    /// The currently selected receiving account.
    pub fn selected_bank(&self) -> Option<&BankAccount> {
        let selected_id = self.selected_bank_id.as_deref()?;
        self.banks.iter().find(|bank| bank.id == selected_id)
    }

    /// Create the donation with the selected account.
    ///
    /// Fails fast without a network call when no account is selected or the
    /// amount is zero. On success the workflow advances to proof upload and
    /// the service-issued donation id is returned; on failure it stays here
    /// and the same action may be retried.
    pub async fn create_donation(&mut self) -> Result<String, Error> {
        if self.state != WorkflowState::PaymentSelection {
            return Err(Error::StepMismatch(self.state));
        }
        if self.create.in_flight() {
            return Err(Error::InFlight("create-donation"));
        }
        let bank_id = self
            .selected_bank_id
            .clone()
            .ok_or(Error::NoBankSelected)?;
        if self.intake.amount() == Amount::ZERO {
            return Err(Error::Validation(intake::ValidationError::ZeroAmount));
        }

        let request = CreateDonationRequest {
            campaign_id: self.campaign_id.clone(),
            amount: self.intake.amount(),
            name: self.intake.name().to_string(),
            email: self.intake.email().to_string(),
            phone_number: self.intake.whatsapp().to_string(),
            doa: self.intake.doa().map(ToString::to_string),
            bank_id,
        };

        self.create.begin();
        match self.connector.post_donation(&request).await {
            Ok(created) => {
                self.create.succeed();
                tracing::info!(
                    "Donation {} created for campaign {}",
                    created.donation_id,
                    self.campaign_id
                );
                self.donation_id = Some(created.donation_id.clone());
                self.state = WorkflowState::ProofUpload;
                Ok(created.donation_id)
            }
            Err(error) => {
                tracing::warn!("Donation creation failed: {}", error);
                self.create.fail(&error);
                Err(error)
            }
        }
    }

    /// Attach or replace the proof image pending upload.
    pub fn attach_proof(&mut self, proof: ProofOfPayment) -> Result<(), Error> {
        if self.state != WorkflowState::ProofUpload {
            return Err(Error::StepMismatch(self.state));
        }
        self.proof = Some(proof);
        Ok(())
    }

    /// Remove the pending proof image, clearing payload and preview together.
    pub fn clear_proof(&mut self) {
        self.proof = None;
    }

    /// The proof image pending upload, if any.
    pub fn proof(&self) -> Option<&ProofOfPayment> {
        self.proof.as_ref()
    }

    /// Upload the attached receipt and confirm the donation.
    ///
    /// Only callable once a donation exists, so the id sent here is always
    /// one issued by a prior successful [`Self::create_donation`] in this
    /// workflow instance.
    pub async fn confirm_receipt(&mut self) -> Result<(), Error> {
        if self.state != WorkflowState::ProofUpload {
            return Err(Error::StepMismatch(self.state));
        }
        if self.confirm.in_flight() {
            return Err(Error::InFlight("confirm-receipt"));
        }
        let donation_id = self
            .donation_id
            .clone()
            .ok_or(Error::StepMismatch(self.state))?;
        let Some(proof) = self.proof.as_ref() else {
            return Err(Error::NoProofAttached);
        };

        self.confirm.begin();
        match self.connector.post_receipt(&donation_id, proof).await {
            Ok(()) => {
                self.confirm.succeed();
                tracing::info!("Donation {} confirmed", donation_id);
                self.state = WorkflowState::Completed;
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Receipt confirmation failed: {}", error);
                self.confirm.fail(&error);
                Err(error)
            }
        }
    }

    /// Re-open the upload step to replace the receipt.
    ///
    /// Only valid after a successful confirmation; the donation id is kept
    /// and no new donation is created.
    pub fn redo_upload(&mut self) -> Result<(), Error> {
        if self.state != WorkflowState::Completed {
            return Err(Error::StepMismatch(self.state));
        }
        self.state = WorkflowState::ProofUpload;
        Ok(())
    }

    /// Identifier issued by the service, available from creation onward.
    pub fn donation_id(&self) -> Option<&str> {
        self.donation_id.as_deref()
    }

    /// Share text for the completed donation.
    pub fn share_message(&self) -> Option<String> {
        let donation_id = self.donation_id.as_deref()?;
        Some(format!(
            "Saya baru saja berdonasi untuk \"{}\". ID Donasi: {}",
            self.campaign_name, donation_id
        ))
    }

    /// WhatsApp deep link sharing the completed donation.
    pub fn share_url(&self) -> Option<Url> {
        if self.state != WorkflowState::Completed {
            return None;
        }
        let message = self.share_message()?;
        let mut url = Url::parse("https://wa.me/").ok()?;
        url.query_pairs_mut().append_pair("text", &message);
        Some(url)
    }

    /// Flags of the bank-list fetch.
    pub fn bank_fetch_action(&self) -> &ActionState {
        &self.bank_fetch
    }

    /// Flags of the create-donation call.
    pub fn create_action(&self) -> &ActionState {
        &self.create
    }

    /// Flags of the confirm-receipt call.
    pub fn confirm_action(&self) -> &ActionState {
        &self.confirm
    }
}
