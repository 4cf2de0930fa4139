//! Display helpers for selected files.

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Human-readable size: bytes below 1 KB, then KB, then MB with one decimal.
///
/// Sizes above a gigabyte stay in MB; receipts never get that large.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Icon shown next to a selected file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileIcon {
    Pdf,
    Image,
}

impl FileIcon {
    /// Classify by MIME type. Everything that is not a PDF is an image,
    /// since validation only lets PDFs and images through.
    pub fn for_mime(mime_type: &str) -> Self {
        if mime_type == "application/pdf" {
            FileIcon::Pdf
        } else {
            FileIcon::Image
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            FileIcon::Pdf => "📄",
            FileIcon::Image => "🖼️",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            FileIcon::Pdf => "file-icon pdf",
            FileIcon::Image => "file-icon image",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(MIB - 1), "1024.0 KB");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_file_size(MIB), "1.0 MB");
        assert_eq!(format_file_size(2 * MIB + MIB / 2), "2.5 MB");
        assert_eq!(format_file_size(10 * MIB), "10.0 MB");
    }

    #[test]
    fn test_icon_for_mime() {
        assert_eq!(FileIcon::for_mime("application/pdf"), FileIcon::Pdf);
        assert_eq!(FileIcon::for_mime("image/png"), FileIcon::Image);
        assert_eq!(FileIcon::for_mime("image/jpeg"), FileIcon::Image);
        assert_eq!(FileIcon::for_mime(""), FileIcon::Image);
    }
}
