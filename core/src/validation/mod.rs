//! Client-side receipt validation.
//!
//! A receipt must be a PDF, JPEG or PNG no larger than [`MAX_FILE_SIZE`].
//! The type is checked first, so an oversized `.docx` reports
//! [`ValidationError::InvalidType`].
//!
//! # Example
//!
//! ```
//! use expense_tracker::{validate, FileMeta, ValidationError};
//!
//! let ok = FileMeta::new("receipt.png", "image/png", 2 * 1024 * 1024);
//! assert!(validate(&ok).is_ok());
//!
//! let docx = FileMeta::new(
//!     "report.docx",
//!     "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
//!     4096,
//! );
//! assert!(matches!(validate(&docx), Err(ValidationError::InvalidType { .. })));
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::models::FileInfo;

/// Upload ceiling: 10 MiB.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Accepted MIME types. `image/jpg` is not registered but some browsers
/// report it for `.jpg` files.
pub const ALLOWED_MIME_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png", "image/jpg"];

/// `accept` attribute for the file picker.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.jpg,.jpeg,.png";

/// Validate a file's type and size.
pub fn validate(file: &impl FileInfo) -> ValidationResult {
    if !is_allowed_type(file.mime_type()) {
        return Err(ValidationError::InvalidType {
            mime_type: file.mime_type().to_string(),
        });
    }

    if file.size_bytes() > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge {
            size_bytes: file.size_bytes(),
        });
    }

    Ok(())
}

/// Whether the MIME type is on the allow-list.
pub fn is_allowed_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileMeta;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_accepts_allowed_types() {
        for mime in ALLOWED_MIME_TYPES {
            let file = FileMeta::new("receipt", *mime, MB);
            assert!(validate(&file).is_ok(), "{mime} should be accepted");
        }
    }

    #[test]
    fn test_rejects_other_types() {
        for mime in ["application/msword", "text/plain", "image/gif", "", "IMAGE/PNG"] {
            let file = FileMeta::new("file", mime, 10);
            assert_eq!(
                validate(&file),
                Err(ValidationError::InvalidType {
                    mime_type: mime.to_string()
                })
            );
        }
    }

    #[test]
    fn test_size_boundary() {
        let at_limit = FileMeta::new("scan.pdf", "application/pdf", MAX_FILE_SIZE);
        assert!(validate(&at_limit).is_ok());

        let over = FileMeta::new("scan.pdf", "application/pdf", MAX_FILE_SIZE + 1);
        assert_eq!(
            validate(&over),
            Err(ValidationError::TooLarge {
                size_bytes: MAX_FILE_SIZE + 1
            })
        );
    }

    #[test]
    fn test_type_checked_before_size() {
        let file = FileMeta::new("big.docx", "application/msword", 50 * MB);
        assert!(matches!(validate(&file), Err(ValidationError::InvalidType { .. })));
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = FileMeta::new("empty.png", "image/png", 0);
        assert!(validate(&file).is_ok());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let files = [
            FileMeta::new("receipt.png", "image/png", 2 * MB),
            FileMeta::new("scan.pdf", "application/pdf", 12 * MB),
            FileMeta::new("report.docx", "application/msword", MB),
        ];
        for file in &files {
            assert_eq!(validate(file), validate(file));
        }
    }

    #[test]
    fn test_scan_pdf_too_large() {
        let file = FileMeta::new("scan.pdf", "application/pdf", 12 * MB);
        let err = validate(&file).unwrap_err();
        assert_eq!(err.title(), "File too large");
    }
}
