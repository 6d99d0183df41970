//! End-to-end tests of the donation workflow over a fake connector

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use galang::types::{
    BankAccount, CampaignDetail, CampaignSummary, Category, CreateDonationRequest,
    DonationCreated, DonationDetail, SubCategory,
};
use galang::{
    CampaignQuery, DonationConnector, DonationWorkflow, Error, ProofOfPayment, WorkflowState,
};

fn bank(id: &str, bank_name: &str) -> BankAccount {
    BankAccount {
        id: id.to_string(),
        name: "Yayasan Amal".to_string(),
        bank_name: bank_name.to_string(),
        account_number: "1234567890".to_string(),
        logo: None,
        icon_url: None,
    }
}

fn proof() -> ProofOfPayment {
    let png = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    ProofOfPayment::from_bytes("proof.png", png).expect("valid png header")
}

/// In-memory stand-in for the remote service, recording every call.
#[derive(Debug, Default)]
struct FakeConnector {
    banks: Vec<BankAccount>,
    fail_create: AtomicBool,
    fail_confirm: AtomicBool,
    created: Mutex<Vec<CreateDonationRequest>>,
    receipts: Mutex<Vec<(String, String)>>,
}

impl FakeConnector {
    fn with_banks(banks: Vec<BankAccount>) -> Arc<Self> {
        Arc::new(Self {
            banks,
            ..Self::default()
        })
    }

    fn created(&self) -> Vec<CreateDonationRequest> {
        self.created.lock().expect("not poisoned").clone()
    }

    fn receipts(&self) -> Vec<(String, String)> {
        self.receipts.lock().expect("not poisoned").clone()
    }
}

#[async_trait]
impl DonationConnector for FakeConnector {
    async fn get_campaigns(&self, _query: &CampaignQuery) -> Result<Vec<CampaignSummary>, Error> {
        Err(Error::Custom("not used by these tests".to_string()))
    }

    async fn get_campaign(&self, _campaign_id: &str) -> Result<CampaignDetail, Error> {
        Err(Error::Custom("not used by these tests".to_string()))
    }

    async fn get_banks(&self) -> Result<Vec<BankAccount>, Error> {
        Ok(self.banks.clone())
    }

    async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        Err(Error::Custom("not used by these tests".to_string()))
    }

    async fn get_sub_categories(&self, _category_id: &str) -> Result<Vec<SubCategory>, Error> {
        Err(Error::Custom("not used by these tests".to_string()))
    }

    async fn post_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<DonationCreated, Error> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Error::Http(Some(500), "Internal Server Error".to_string()));
        }
        self.created
            .lock()
            .expect("not poisoned")
            .push(request.clone());
        Ok(DonationCreated {
            donation_id: "D123".to_string(),
        })
    }

    async fn post_receipt(
        &self,
        donation_id: &str,
        proof: &ProofOfPayment,
    ) -> Result<(), Error> {
        if self.fail_confirm.load(Ordering::SeqCst) {
            return Err(Error::Http(Some(500), "Internal Server Error".to_string()));
        }
        self.receipts
            .lock()
            .expect("not poisoned")
            .push((donation_id.to_string(), proof.file_name().to_string()));
        Ok(())
    }

    async fn get_donation(&self, _donation_id: &str) -> Result<DonationDetail, Error> {
        Err(Error::Custom("not used by these tests".to_string()))
    }
}

fn workflow_with(connector: Arc<FakeConnector>) -> DonationWorkflow {
    DonationWorkflow::new(connector, "c1", "Bantu Pembangunan Masjid")
}

fn fill_intake(workflow: &mut DonationWorkflow) {
    let intake = workflow.intake_mut();
    intake.set_name("Budi");
    intake.set_whatsapp("081234567890");
    intake.set_email("b@x.com");
    intake.select_preset(100_000);
}

#[tokio::test]
async fn test_end_to_end_success() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA"), bank("B2", "Mandiri")]);
    let mut workflow = workflow_with(connector.clone());

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    assert_eq!(workflow.state(), WorkflowState::PaymentSelection);

    workflow.load_banks().await.expect("banks load");
    assert_eq!(
        workflow.selected_bank().map(|b| b.id.as_str()),
        Some("B1"),
        "first bank auto-selected"
    );

    let donation_id = workflow.create_donation().await.expect("create succeeds");
    assert_eq!(donation_id, "D123");
    assert_eq!(workflow.state(), WorkflowState::ProofUpload);

    workflow.attach_proof(proof()).expect("upload step");
    workflow.confirm_receipt().await.expect("confirm succeeds");

    assert_eq!(workflow.state(), WorkflowState::Completed);
    assert_eq!(workflow.donation_id(), Some("D123"));
    let share = workflow.share_url().expect("share link available");
    assert!(share.as_str().starts_with("https://wa.me/?text="));
    assert!(share.as_str().contains("D123"));

    let created = connector.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].campaign_id, "c1");
    assert_eq!(created[0].bank_id, "B1");
    assert_eq!(created[0].phone_number, "081234567890");
    assert_eq!(created[0].doa, None);
}

#[tokio::test]
async fn test_intake_guard_blocks_incomplete_data() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector);

    // All fields empty
    assert!(matches!(
        workflow.submit_intake(),
        Err(Error::Validation(_))
    ));
    assert_eq!(workflow.state(), WorkflowState::Intake);

    // Everything but the amount
    let intake = workflow.intake_mut();
    intake.set_name("Budi");
    intake.set_whatsapp("081234567890");
    intake.set_email("b@x.com");
    intake.set_custom_amount("abc");
    assert!(matches!(
        workflow.submit_intake(),
        Err(Error::Validation(_))
    ));
    assert_eq!(workflow.state(), WorkflowState::Intake);

    workflow.intake_mut().select_preset(50_000);
    workflow.submit_intake().expect("now valid");
    assert_eq!(workflow.state(), WorkflowState::PaymentSelection);
}

#[tokio::test]
async fn test_create_fails_fast_without_bank_selection() {
    let connector = FakeConnector::with_banks(vec![]);
    let mut workflow = workflow_with(connector.clone());

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("empty list still loads");
    assert!(workflow.selected_bank().is_none());

    assert!(matches!(
        workflow.create_donation().await,
        Err(Error::NoBankSelected)
    ));
    assert!(connector.created().is_empty(), "no network call was made");
}

#[tokio::test]
async fn test_create_failure_keeps_step_and_selection() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA"), bank("B2", "Mandiri")]);
    let mut workflow = workflow_with(connector.clone());

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");
    workflow.select_bank("B2").expect("listed bank");

    connector.fail_create.store(true, Ordering::SeqCst);
    let result = workflow.create_donation().await;
    assert!(matches!(result, Err(Error::Http(Some(500), _))));

    assert_eq!(workflow.state(), WorkflowState::PaymentSelection);
    assert_eq!(workflow.selected_bank().map(|b| b.id.as_str()), Some("B2"));
    assert_eq!(workflow.intake().amount().value(), 100_000);
    assert!(workflow.create_action().error().is_some());
    assert!(!workflow.create_action().in_flight());

    // Manual retry of the same action succeeds
    connector.fail_create.store(false, Ordering::SeqCst);
    workflow.create_donation().await.expect("retry succeeds");
    assert_eq!(workflow.state(), WorkflowState::ProofUpload);
    assert!(workflow.create_action().error().is_none());
}

#[tokio::test]
async fn test_confirm_requires_created_donation_and_proof() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector.clone());

    // Confirming before anything else is a step mismatch
    assert!(matches!(
        workflow.confirm_receipt().await,
        Err(Error::StepMismatch(WorkflowState::Intake))
    ));

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");
    workflow.create_donation().await.expect("create succeeds");

    // No proof attached yet
    assert!(matches!(
        workflow.confirm_receipt().await,
        Err(Error::NoProofAttached)
    ));
    assert_eq!(workflow.state(), WorkflowState::ProofUpload);

    workflow.attach_proof(proof()).expect("upload step");
    workflow.confirm_receipt().await.expect("confirm succeeds");

    // Causal ordering: the receipt went to the id issued at creation
    assert_eq!(
        connector.receipts(),
        vec![("D123".to_string(), "proof.png".to_string())]
    );
}

#[tokio::test]
async fn test_confirm_failure_stays_on_upload_step() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector.clone());

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");
    workflow.create_donation().await.expect("create succeeds");
    workflow.attach_proof(proof()).expect("upload step");

    connector.fail_confirm.store(true, Ordering::SeqCst);
    assert!(workflow.confirm_receipt().await.is_err());
    assert_eq!(workflow.state(), WorkflowState::ProofUpload);
    assert!(workflow.confirm_action().error().is_some());
    assert_eq!(workflow.donation_id(), Some("D123"));

    connector.fail_confirm.store(false, Ordering::SeqCst);
    workflow.confirm_receipt().await.expect("retry succeeds");
    assert_eq!(workflow.state(), WorkflowState::Completed);
}

#[tokio::test]
async fn test_redo_upload_preserves_donation_id() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector.clone());

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");
    workflow.create_donation().await.expect("create succeeds");
    workflow.attach_proof(proof()).expect("upload step");
    workflow.confirm_receipt().await.expect("confirm succeeds");
    assert_eq!(workflow.state(), WorkflowState::Completed);

    // Redo is only offered after completion
    workflow.redo_upload().expect("completed workflow");
    assert_eq!(workflow.state(), WorkflowState::ProofUpload);
    assert_eq!(workflow.donation_id(), Some("D123"));

    let replacement = ProofOfPayment::from_bytes("better.png", proof().bytes().to_vec())
        .expect("valid png header");
    workflow.attach_proof(replacement).expect("upload step");
    workflow.confirm_receipt().await.expect("re-confirm succeeds");

    // Same donation confirmed twice, never created twice
    assert_eq!(connector.created().len(), 1);
    assert_eq!(connector.receipts().len(), 2);
    assert!(connector
        .receipts()
        .iter()
        .all(|(donation_id, _)| donation_id == "D123"));
}

#[tokio::test]
async fn test_redo_upload_rejected_before_completion() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector);

    assert!(matches!(
        workflow.redo_upload(),
        Err(Error::StepMismatch(WorkflowState::Intake))
    ));
}

#[tokio::test]
async fn test_select_bank_rejects_unknown_id() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector);

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");

    assert!(matches!(
        workflow.select_bank("nope"),
        Err(Error::UnknownBank(_))
    ));
    assert_eq!(workflow.selected_bank().map(|b| b.id.as_str()), Some("B1"));
}

#[tokio::test]
async fn test_clear_proof_drops_payload_and_preview() {
    let connector = FakeConnector::with_banks(vec![bank("B1", "BCA")]);
    let mut workflow = workflow_with(connector);

    fill_intake(&mut workflow);
    workflow.submit_intake().expect("intake is valid");
    workflow.load_banks().await.expect("banks load");
    workflow.create_donation().await.expect("create succeeds");

    workflow.attach_proof(proof()).expect("upload step");
    assert!(workflow.proof().is_some());

    workflow.clear_proof();
    assert!(workflow.proof().is_none());
    assert!(matches!(
        workflow.confirm_receipt().await,
        Err(Error::NoProofAttached)
    ));
}
