//! SDK errors

use thiserror::Error;

use crate::workflow::intake::ValidationError;
use crate::workflow::proof::ProofError;
use crate::workflow::WorkflowState;

/// SDK Error
#[derive(Debug, Error)]
pub enum Error {
    /// API host missing from configuration
    #[error("API host is not configured")]
    MissingApiHost,
    /// API key missing from configuration
    #[error("API key is not configured")]
    MissingApiKey,
    /// Non-success response or transport failure
    #[error("HTTP error: status `{0:?}` body `{1}`")]
    Http(Option<u16>, String),
    /// Input failed a workflow guard
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Proof image rejected
    #[error(transparent)]
    Proof(#[from] ProofError),
    /// Action is not available in the current workflow step
    #[error("Action not available in the {0:?} step")]
    StepMismatch(WorkflowState),
    /// The same action is already in flight
    #[error("A `{0}` request is already in flight")]
    InFlight(&'static str),
    /// No receiving account selected
    #[error("No receiving account selected")]
    NoBankSelected,
    /// The selected bank id is not in the fetched list
    #[error("Unknown receiving account: `{0}`")]
    UnknownBank(String),
    /// No proof of payment attached
    #[error("No proof of payment attached")]
    NoProofAttached,
    /// Page numbers start at 1
    #[error("Page numbers start at 1")]
    InvalidPage,
    /// Url Error
    #[error(transparent)]
    Url(#[from] galang_types::api_url::Error),
    /// Serde Error
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// Custom Error
    #[error("`{0}`")]
    Custom(String),
}
