//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the browser file handed to the wizard
//! - **Notice Types** - toast notices shown over the wizard

use expense_tracker::{FileInfo, FileMeta, TransportError, UploadReceipt, WizardError};
use web_sys::File;

// =============================================================================
// File Types
// =============================================================================

/// A file picked by the user: the browser blob plus its metadata.
///
/// Metadata is read once at selection; the blob is only touched when the
/// multipart body is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptFile {
    blob: File,
    meta: FileMeta,
}

impl ReceiptFile {
    pub fn new(blob: File) -> Self {
        // Blob sizes are whole bytes reported as f64
        let meta = FileMeta::new(blob.name(), blob.type_(), blob.size() as u64);
        Self { blob, meta }
    }

    pub fn blob(&self) -> &File {
        &self.blob
    }

    pub fn meta(&self) -> &FileMeta {
        &self.meta
    }
}

impl FileInfo for ReceiptFile {
    fn name(&self) -> &str {
        &self.meta.name
    }

    fn mime_type(&self) -> &str {
        &self.meta.mime_type
    }

    fn size_bytes(&self) -> u64 {
        self.meta.size_bytes
    }
}

// =============================================================================
// Notice Types
// =============================================================================

/// Notice styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeVariant {
    Default,
    Destructive,
}

impl NoticeVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeVariant::Default => "toast",
            NoticeVariant::Destructive => "toast destructive",
        }
    }
}

/// A dismissible message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    /// Refused wizard action. Validation failures carry their own wording.
    pub fn from_wizard_error(error: &WizardError) -> Self {
        match error {
            WizardError::Validation(e) => Self::new(e.title(), e.description(), NoticeVariant::Destructive),
            other => Self::new("Action unavailable", other.to_string(), NoticeVariant::Destructive),
        }
    }

    pub fn upload_succeeded(receipt: &UploadReceipt) -> Self {
        let description = if receipt.message.is_empty() {
            "Receipt uploaded successfully".to_string()
        } else {
            receipt.message.clone()
        };
        Self::new("Success!", description, NoticeVariant::Default)
    }

    pub fn upload_failed(error: &TransportError) -> Self {
        Self::new("Upload failed", error.to_string(), NoticeVariant::Destructive)
    }
}
