//! # Expense Tracker - receipt upload core
//!
//! Platform-free logic behind the receipt upload wizard: file validation,
//! the webhook upload protocol and the step state machine. The Leptos
//! frontend renders this state and performs the actual HTTP calls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  File pick  │────▶│  Validator  │────▶│   Wizard    │────▶│   Webhook   │
//! │  (browser)  │     │ (type/size) │     │ (3 steps)   │     │ (multipart) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Validation, transport and transition errors
//! - [`models`] - File metadata
//! - [`validation`] - Type and size checks
//! - [`format`] - Size and icon display helpers
//! - [`upload`] - Multipart fields and response interpretation
//! - [`wizard`] - Step controller
//! - [`config`] - Webhook and dashboard URLs

// Core modules
pub mod error;
pub mod models;

pub mod config;
pub mod format;
pub mod upload;
pub mod validation;
pub mod wizard;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{
    TransportError,
    ValidationError,
    ValidationResult,
    WizardError,
    WizardResult,
};

pub use models::{FileInfo, FileMeta};

pub use config::AppConfig;

pub use format::{format_file_size, FileIcon};

pub use validation::{validate, ACCEPTED_EXTENSIONS, ALLOWED_MIME_TYPES, MAX_FILE_SIZE};

pub use upload::{
    interpret_response,
    is_reachable,
    UploadData,
    UploadPayload,
    UploadReceipt,
    UploadResult,
};

pub use wizard::{Step, Submission, SubmissionToken, SubmitOutcome, Wizard};
