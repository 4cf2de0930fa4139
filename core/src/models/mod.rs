//! Domain models shared by the validator, the upload protocol and the wizard.
//!
//! The browser hands us an opaque blob; everything the domain logic needs
//! from it is captured by [`FileInfo`]. [`FileMeta`] is the plain value
//! implementation used natively and in tests.

use serde::{Deserialize, Serialize};

// =============================================================================
// File handle
// =============================================================================

/// Metadata view over a selected file.
///
/// Implemented by [`FileMeta`] and by the frontend's browser file wrapper.
pub trait FileInfo {
    /// File name as reported by the picker (no path).
    fn name(&self) -> &str;

    /// MIME type as reported by the browser. May be empty.
    fn mime_type(&self) -> &str;

    /// Size in bytes.
    fn size_bytes(&self) -> u64;
}

/// Plain file metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size_bytes,
        }
    }

    /// Snapshot the metadata of any [`FileInfo`].
    pub fn of(file: &impl FileInfo) -> Self {
        Self::new(file.name(), file.mime_type(), file.size_bytes())
    }
}

impl FileInfo for FileMeta {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_serializes_camel_case() {
        let meta = FileMeta::new("receipt.png", "image/png", 2048);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "receipt.png");
        assert_eq!(json["mimeType"], "image/png");
        assert_eq!(json["sizeBytes"], 2048);
    }

    #[test]
    fn test_of_copies_metadata() {
        let meta = FileMeta::new("scan.pdf", "application/pdf", 10);
        assert_eq!(FileMeta::of(&meta), meta);
    }
}
