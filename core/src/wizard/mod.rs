//! The three-step upload wizard.
//!
//! ```text
//!            get_started              finish_submit(Ok)
//!  Welcome ─────────────▶ Upload ───────────────────▶ Success
//!     ▲                   │  ▲ │                           │
//!     └────── back ───────┘  │ └ select_file / remove_file │
//!                            │   begin_submit              │
//!                            │   finish_submit(Err)        │
//!                            └────── upload_another ───────┘
//! ```
//!
//! [`Wizard`] is the only owner of the current step and the selected file.
//! Every transition either succeeds or returns a [`WizardError`] and leaves
//! the state untouched. At most one submission is in flight; navigating away
//! while it runs invalidates its [`SubmissionToken`] so the late result is
//! dropped instead of yanking the user to a step they left.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TransportError, WizardError, WizardResult};
use crate::models::FileInfo;
use crate::upload::{UploadReceipt, UploadResult};
use crate::validation::validate;

// =============================================================================
// Steps
// =============================================================================

/// Wizard step, numbered from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Welcome = 1,
    Upload = 2,
    Success = 3,
}

impl Step {
    /// Number of steps.
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        self as u8
    }

    /// "Step 2 of 3".
    pub fn progress_label(self) -> String {
        format!("Step {} of {}", self.number(), Self::COUNT)
    }
}

impl TryFrom<u8> for Step {
    type Error = u8;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Step::Welcome),
            2 => Ok(Step::Upload),
            3 => Ok(Step::Success),
            other => Err(other),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Welcome => "welcome",
            Step::Upload => "upload",
            Step::Success => "success",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Submissions
// =============================================================================

/// Identifies one submission. Only the latest token is honoured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionToken(u64);

/// A started submission: the token to report back with and the file to send.
#[derive(Clone, Debug)]
pub struct Submission<F> {
    pub token: SubmissionToken,
    pub file: F,
}

/// What [`Wizard::finish_submit`] did with a result.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Moved to [`Step::Success`].
    Completed,
    /// Stayed on [`Step::Upload`] with the file kept for a retry.
    Failed(TransportError),
    /// The user navigated away before the result arrived.
    Discarded,
}

// =============================================================================
// Wizard
// =============================================================================

/// Wizard state: current step plus the selected file.
///
/// Invariants: [`Step::Welcome`] has no file, [`Step::Success`] always has
/// one.
#[derive(Clone, Debug)]
pub struct Wizard<F> {
    step: Step,
    file: Option<F>,
    receipt: Option<UploadReceipt>,
    in_flight: Option<SubmissionToken>,
    generation: u64,
}

impl<F> Default for Wizard<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Wizard<F> {
    /// A wizard on the welcome step.
    pub fn new() -> Self {
        Self {
            step: Step::Welcome,
            file: None,
            receipt: None,
            in_flight: None,
            generation: 0,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Receipt of the upload that led to [`Step::Success`].
    pub fn receipt(&self) -> Option<&UploadReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether "Process Receipt" should be enabled.
    pub fn can_submit(&self) -> bool {
        self.step == Step::Upload && self.file.is_some() && !self.is_submitting()
    }

    /// Welcome → Upload.
    pub fn get_started(&mut self) -> WizardResult<()> {
        self.expect_step(Step::Welcome, "get started")?;
        self.step = Step::Upload;
        log::debug!("Wizard: welcome -> upload");
        Ok(())
    }

    /// Upload → Welcome, dropping the selection and any pending submission.
    pub fn back(&mut self) -> WizardResult<()> {
        self.expect_step(Step::Upload, "go back")?;
        self.invalidate_submission();
        self.file = None;
        self.step = Step::Welcome;
        log::debug!("Wizard: upload -> welcome");
        Ok(())
    }

    /// Clear the selected file on the upload step.
    pub fn remove_file(&mut self) -> WizardResult<Option<F>> {
        self.expect_step(Step::Upload, "remove a file")?;
        self.expect_idle()?;
        Ok(self.file.take())
    }

    /// Success → Upload with a clean slate.
    pub fn upload_another(&mut self) -> WizardResult<()> {
        self.expect_step(Step::Success, "upload another")?;
        self.file = None;
        self.receipt = None;
        self.step = Step::Upload;
        log::debug!("Wizard: success -> upload");
        Ok(())
    }

    /// Apply the result of the submission identified by `token`.
    pub fn finish_submit(&mut self, token: SubmissionToken, result: UploadResult) -> SubmitOutcome {
        if self.in_flight != Some(token) || self.step != Step::Upload || self.file.is_none() {
            log::debug!("Wizard: discarding stale submission result");
            return SubmitOutcome::Discarded;
        }
        self.in_flight = None;

        match result {
            Ok(receipt) => {
                self.receipt = Some(receipt);
                self.step = Step::Success;
                log::debug!("Wizard: upload -> success");
                SubmitOutcome::Completed
            }
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    fn expect_step(&self, step: Step, action: &'static str) -> WizardResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition { from: self.step, action })
        }
    }

    fn expect_idle(&self) -> WizardResult<()> {
        if self.is_submitting() {
            Err(WizardError::SubmissionInFlight)
        } else {
            Ok(())
        }
    }

    fn invalidate_submission(&mut self) {
        if self.in_flight.take().is_some() {
            log::info!("Abandoning in-flight upload");
        }
        self.generation += 1;
    }
}

impl<F: FileInfo> Wizard<F> {
    /// Validate and attach `file`, replacing any previous selection.
    ///
    /// A rejected file leaves the previous selection in place.
    pub fn select_file(&mut self, file: F) -> WizardResult<()> {
        self.expect_step(Step::Upload, "select a file")?;
        self.expect_idle()?;
        validate(&file)?;
        log::debug!("Wizard: selected {}", file.name());
        self.file = Some(file);
        Ok(())
    }

    /// Name of the uploaded file, available on [`Step::Success`].
    pub fn success_file_name(&self) -> Option<&str> {
        match self.step {
            Step::Success => self.file.as_ref().map(|f| f.name()),
            _ => None,
        }
    }
}

impl<F: Clone> Wizard<F> {
    /// Start submitting the selected file.
    pub fn begin_submit(&mut self) -> WizardResult<Submission<F>> {
        self.expect_step(Step::Upload, "submit")?;
        self.expect_idle()?;
        let file = self.file.clone().ok_or(WizardError::NoFileSelected)?;

        self.generation += 1;
        let token = SubmissionToken(self.generation);
        self.in_flight = Some(token);
        Ok(Submission { token, file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::models::FileMeta;
    use crate::upload::{interpret_response, UploadPayload};
    use chrono::Utc;

    const MB: u64 = 1024 * 1024;

    fn on_upload() -> Wizard<FileMeta> {
        let mut wizard = Wizard::new();
        wizard.get_started().unwrap();
        wizard
    }

    fn respond(file: &FileMeta, status: u16, reason: &str, body: &str) -> UploadResult {
        interpret_response(status, reason, body, &UploadPayload::new(file, Utc::now()))
    }

    #[test]
    fn test_initial_state() {
        let wizard: Wizard<FileMeta> = Wizard::new();
        assert_eq!(wizard.step(), Step::Welcome);
        assert!(wizard.selected_file().is_none());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(Step::Upload.number(), 2);
        assert_eq!(Step::try_from(3), Ok(Step::Success));
        assert_eq!(Step::try_from(4), Err(4));
        assert_eq!(Step::Upload.progress_label(), "Step 2 of 3");
    }

    #[test]
    fn test_get_started() {
        let wizard = on_upload();
        assert_eq!(wizard.step(), Step::Upload);
        assert!(wizard.selected_file().is_none());
    }

    #[test]
    fn test_get_started_only_from_welcome() {
        let mut wizard = on_upload();
        let err = wizard.get_started().unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidTransition {
                from: Step::Upload,
                action: "get started"
            }
        );
    }

    #[test]
    fn test_back_clears_file() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("receipt.png", "image/png", MB)).unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), Step::Welcome);
        assert!(wizard.selected_file().is_none());
    }

    #[test]
    fn test_back_only_from_upload() {
        let mut wizard: Wizard<FileMeta> = Wizard::new();
        assert!(wizard.back().is_err());
        assert_eq!(wizard.step(), Step::Welcome);
    }

    #[test]
    fn test_select_replaces_file() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("a.png", "image/png", MB)).unwrap();
        wizard.select_file(FileMeta::new("b.pdf", "application/pdf", MB)).unwrap();
        assert_eq!(wizard.selected_file().map(|f| f.name()), Some("b.pdf"));
        assert_eq!(wizard.step(), Step::Upload);
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("a.png", "image/png", MB)).unwrap();
        let err = wizard
            .select_file(FileMeta::new("notes.txt", "text/plain", 10))
            .unwrap_err();
        assert!(matches!(err, WizardError::Validation(ValidationError::InvalidType { .. })));
        assert_eq!(wizard.selected_file().map(|f| f.name()), Some("a.png"));
    }

    #[test]
    fn test_select_requires_upload_step() {
        let mut wizard = Wizard::new();
        assert!(wizard.select_file(FileMeta::new("a.png", "image/png", 1)).is_err());
        assert!(wizard.selected_file().is_none());
    }

    #[test]
    fn test_remove_file() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("a.png", "image/png", 1)).unwrap();
        let removed = wizard.remove_file().unwrap();
        assert_eq!(removed.map(|f| f.name), Some("a.png".to_string()));
        assert!(wizard.selected_file().is_none());
        assert_eq!(wizard.step(), Step::Upload);
    }

    #[test]
    fn test_begin_submit_requires_file() {
        let mut wizard: Wizard<FileMeta> = on_upload();
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::NoFileSelected);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("a.png", "image/png", 1)).unwrap();
        wizard.begin_submit().unwrap();
        assert!(wizard.is_submitting());
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit().unwrap_err(), WizardError::SubmissionInFlight);
        assert_eq!(
            wizard.select_file(FileMeta::new("b.png", "image/png", 1)).unwrap_err(),
            WizardError::SubmissionInFlight
        );
        assert_eq!(wizard.remove_file().unwrap_err(), WizardError::SubmissionInFlight);
    }

    #[test]
    fn test_result_after_back_is_discarded() {
        let mut wizard = on_upload();
        let file = FileMeta::new("a.png", "image/png", 1);
        wizard.select_file(file.clone()).unwrap();
        let submission = wizard.begin_submit().unwrap();

        wizard.back().unwrap();
        wizard.get_started().unwrap();
        wizard.select_file(file.clone()).unwrap();

        let outcome = wizard.finish_submit(submission.token, respond(&file, 200, "OK", "{}"));
        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(wizard.step(), Step::Upload);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_old_token_ignored_after_resubmit() {
        let mut wizard = on_upload();
        let file = FileMeta::new("a.png", "image/png", 1);
        wizard.select_file(file.clone()).unwrap();

        let first = wizard.begin_submit().unwrap();
        let failure = respond(&file, 500, "Internal Server Error", "");
        assert!(matches!(wizard.finish_submit(first.token, failure), SubmitOutcome::Failed(_)));

        let second = wizard.begin_submit().unwrap();
        assert_ne!(first.token, second.token);
        let late = respond(&file, 200, "OK", "{}");
        assert_eq!(wizard.finish_submit(first.token, late), SubmitOutcome::Discarded);
        assert!(wizard.is_submitting());
    }

    #[test]
    fn test_upload_another() {
        let mut wizard = on_upload();
        let file = FileMeta::new("a.png", "image/png", 1);
        wizard.select_file(file.clone()).unwrap();
        let submission = wizard.begin_submit().unwrap();
        wizard.finish_submit(submission.token, respond(&file, 200, "OK", ""));

        wizard.upload_another().unwrap();
        assert_eq!(wizard.step(), Step::Upload);
        assert!(wizard.selected_file().is_none());
        assert!(wizard.receipt().is_none());
    }

    #[test]
    fn test_upload_another_only_from_success() {
        let mut wizard: Wizard<FileMeta> = on_upload();
        assert!(wizard.upload_another().is_err());
    }

    #[test]
    fn test_success_file_name_only_on_success() {
        let mut wizard = on_upload();
        wizard.select_file(FileMeta::new("a.png", "image/png", 1)).unwrap();
        assert_eq!(wizard.success_file_name(), None);
    }

    // -------------------------------------------------------------------------
    // End-to-end flows
    // -------------------------------------------------------------------------

    #[test]
    fn test_flow_png_upload_succeeds() {
        let mut wizard = on_upload();
        let file = FileMeta::new("receipt.png", "image/png", 2 * MB);
        wizard.select_file(file.clone()).unwrap();

        let submission = wizard.begin_submit().unwrap();
        let result = respond(&submission.file, 200, "OK", r#"{"fileId":"abc"}"#);
        assert_eq!(wizard.finish_submit(submission.token, result), SubmitOutcome::Completed);

        assert_eq!(wizard.step(), Step::Success);
        assert_eq!(wizard.success_file_name(), Some("receipt.png"));
        let receipt = wizard.receipt().unwrap();
        assert_eq!(receipt.data.file_id.as_deref(), Some("abc"));
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_flow_docx_rejected() {
        let mut wizard = on_upload();
        let docx = FileMeta::new(
            "report.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            200 * 1024,
        );
        let err = wizard.select_file(docx).unwrap_err();
        assert!(matches!(err, WizardError::Validation(ValidationError::InvalidType { .. })));
        assert_eq!(wizard.step(), Step::Upload);
        assert!(wizard.selected_file().is_none());
    }

    #[test]
    fn test_flow_large_pdf_rejected() {
        let mut wizard = on_upload();
        let err = wizard
            .select_file(FileMeta::new("scan.pdf", "application/pdf", 12 * MB))
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::Validation(ValidationError::TooLarge { size_bytes: 12 * MB })
        );
        assert!(wizard.selected_file().is_none());
    }

    #[test]
    fn test_flow_server_error_keeps_file() {
        let mut wizard = on_upload();
        let file = FileMeta::new("receipt.jpg", "image/jpeg", MB);
        wizard.select_file(file.clone()).unwrap();

        let submission = wizard.begin_submit().unwrap();
        let result = respond(&file, 500, "Internal Server Error", "");
        match wizard.finish_submit(submission.token, result) {
            SubmitOutcome::Failed(e) => assert_eq!(e.status_code(), 500),
            other => panic!("expected failure, got {:?}", other),
        }

        assert_eq!(wizard.step(), Step::Upload);
        assert_eq!(wizard.selected_file(), Some(&file));
        assert!(wizard.can_submit());
    }
}
