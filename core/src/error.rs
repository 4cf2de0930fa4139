//! Error types for the receipt upload flow.
//!
//! - [`ValidationError`] - file rejected before upload
//! - [`TransportError`] - the webhook request failed
//! - [`WizardError`] - an action the current wizard state does not allow
//!
//! None of these are fatal: every one of them leaves the wizard in an
//! interactive state.

use thiserror::Error;

use crate::wizard::Step;

// =============================================================================
// Validation Errors
// =============================================================================

/// Reasons a selected file is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// MIME type outside the allow-list.
    #[error("Invalid file type: {mime_type:?}")]
    InvalidType { mime_type: String },

    /// File larger than the upload ceiling.
    #[error("File too large: {size_bytes} bytes")]
    TooLarge { size_bytes: u64 },
}

impl ValidationError {
    /// Short notice title shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } => "Invalid file type",
            ValidationError::TooLarge { .. } => "File too large",
        }
    }

    /// Notice body shown to the user.
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::InvalidType { .. } => "Please upload a PDF, JPG, or PNG file",
            ValidationError::TooLarge { .. } => "Maximum file size is 10MB",
        }
    }
}

// =============================================================================
// Transport Errors
// =============================================================================

/// Message used when the transport gives no detail.
pub const GENERIC_NETWORK_ERROR: &str = "Network error occurred";

/// Failures of the webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The webhook answered with a non-2xx status.
    #[error("Upload failed: {reason}")]
    HttpStatus { code: u16, reason: String },

    /// No response was received.
    #[error("{0}")]
    NetworkFailure(String),

    /// 2xx response whose body is not JSON.
    #[error("Invalid webhook response: {0}")]
    MalformedBody(String),
}

impl TransportError {
    /// Network failure, falling back to the generic message when the
    /// transport reports nothing useful.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            TransportError::NetworkFailure(GENERIC_NETWORK_ERROR.to_string())
        } else {
            TransportError::NetworkFailure(detail)
        }
    }

    /// HTTP status of the failure, `0` when no status was received.
    pub fn status_code(&self) -> u16 {
        match self {
            TransportError::HttpStatus { code, .. } => *code,
            TransportError::NetworkFailure(_) | TransportError::MalformedBody(_) => 0,
        }
    }
}

// =============================================================================
// Wizard Errors
// =============================================================================

/// Actions refused by the wizard state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The action has no transition from the current step.
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition { from: Step, action: &'static str },

    /// Submission requested without a selected file.
    #[error("No file selected")]
    NoFileSelected,

    /// A submission is already waiting for the webhook.
    #[error("An upload is already in progress")]
    SubmissionInFlight,

    /// The selected file failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for validation.
pub type ValidationResult = Result<(), ValidationError>;

/// Result type for wizard transitions.
pub type WizardResult<T> = Result<T, WizardError>;
