//! Client SDK for the galang donation platform.
//!
//! The SDK is organized around a [`DonationConnector`] trait that maps the
//! platform's REST API into typed operations. [`HttpClient`] is the reqwest
//! implementation; tests swap in fakes. On top of the connector sit the
//! read-only providers ([`Catalog`], [`BankDirectory`]) and the stateful
//! three-step [`DonationWorkflow`] (intake, payment selection with a manual
//! bank transfer, proof-of-payment upload).

pub mod banks;
pub mod catalog;
pub mod config;
pub mod connector;
pub mod error;
pub mod workflow;

pub use galang_types as types;

pub use self::banks::BankDirectory;
pub use self::catalog::{Catalog, CategoryFilter};
pub use self::config::ApiConfig;
pub use self::connector::http_client::HttpClient;
pub use self::connector::{CampaignQuery, DonationConnector};
pub use self::error::Error;
pub use self::workflow::intake::{IntakeForm, ValidationError, PRESET_AMOUNTS};
pub use self::workflow::proof::ProofOfPayment;
pub use self::workflow::{DonationWorkflow, WorkflowState};
