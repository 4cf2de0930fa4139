//! Webhook upload protocol.
//!
//! Everything about the upload that does not need a browser lives here:
//! the multipart text fields sent next to the binary, the interpretation
//! of the webhook's answer, and the connectivity check classification.
//! The frontend's HTTP client only moves bytes.
//!
//! # Request
//!
//! | Field        | Value                                   |
//! |--------------|-----------------------------------------|
//! | `file`       | binary content, sent with its file name |
//! | `fileName`   | file name                               |
//! | `fileType`   | MIME type                               |
//! | `fileSize`   | size in bytes, decimal                  |
//! | `uploadedAt` | client timestamp, ISO-8601 UTC          |
//!
//! # Response
//!
//! A 2xx JSON object is merged over `{ fileName, uploadedAt }`, so the
//! webhook can attach an identifier (`fileId`) or override either field.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TransportError;
use crate::models::FileInfo;

pub const FIELD_FILE: &str = "file";
pub const FIELD_FILE_NAME: &str = "fileName";
pub const FIELD_FILE_TYPE: &str = "fileType";
pub const FIELD_FILE_SIZE: &str = "fileSize";
pub const FIELD_UPLOADED_AT: &str = "uploadedAt";

/// Message attached to every successful upload.
pub const SUCCESS_MESSAGE: &str = "File uploaded successfully";

/// Status some webhooks answer to a GET on a POST-only endpoint.
const METHOD_NOT_ALLOWED: u16 = 405;

/// Outcome of one upload attempt.
pub type UploadResult = Result<UploadReceipt, TransportError>;

// =============================================================================
// Request
// =============================================================================

/// Text fields sent alongside the binary part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadPayload {
    pub file_name: String,
    pub file_type: String,
    pub file_size: String,
    pub uploaded_at: String,
}

impl UploadPayload {
    /// Describe `file` as submitted at `now`.
    pub fn new(file: &impl FileInfo, now: DateTime<Utc>) -> Self {
        Self {
            file_name: file.name().to_string(),
            file_type: file.mime_type().to_string(),
            file_size: file.size_bytes().to_string(),
            uploaded_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// `(field, value)` pairs in the order they are appended to the form.
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            (FIELD_FILE_NAME, &self.file_name),
            (FIELD_FILE_TYPE, &self.file_type),
            (FIELD_FILE_SIZE, &self.file_size),
            (FIELD_UPLOADED_AT, &self.uploaded_at),
        ]
    }
}

// =============================================================================
// Response
// =============================================================================

/// Successful upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub message: String,
    pub data: UploadData,
}

/// Client fields merged with whatever the webhook returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadData {
    /// Identifier assigned by the webhook, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    pub file_name: String,
    pub uploaded_at: String,
    /// Remaining server fields, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UploadData {
    fn merge(payload: &UploadPayload, server: Option<Map<String, Value>>) -> Self {
        let mut fields = server.unwrap_or_default();

        let file_id = fields.remove("fileId").and_then(scalar_to_string);
        let file_name = fields
            .remove(FIELD_FILE_NAME)
            .and_then(scalar_to_string)
            .unwrap_or_else(|| payload.file_name.clone());
        let uploaded_at = fields
            .remove(FIELD_UPLOADED_AT)
            .and_then(scalar_to_string)
            .unwrap_or_else(|| payload.uploaded_at.clone());

        Self {
            file_id,
            file_name,
            uploaded_at,
            extra: fields,
        }
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Turn the webhook's answer into an [`UploadResult`].
///
/// `status_text` is the HTTP reason phrase; HTTP/2 responses usually carry
/// none, in which case the status code is reported instead.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
    payload: &UploadPayload,
) -> UploadResult {
    if !(200..300).contains(&status) {
        let reason = if status_text.trim().is_empty() {
            format!("HTTP {}", status)
        } else {
            status_text.trim().to_string()
        };
        log::warn!("Webhook rejected upload of {} ({}): {}", payload.file_name, status, body.trim());
        return Err(TransportError::HttpStatus { code: status, reason });
    }

    let server = if body.trim().is_empty() {
        None
    } else {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Some(map),
            Ok(other) => {
                log::debug!("Ignoring non-object webhook response: {}", other);
                None
            }
            Err(e) => return Err(TransportError::MalformedBody(e.to_string())),
        }
    };

    Ok(UploadReceipt {
        message: SUCCESS_MESSAGE.to_string(),
        data: UploadData::merge(payload, server),
    })
}

/// Connectivity check classification: 2xx or 405 mean the endpoint exists.
pub fn is_reachable(status: u16) -> bool {
    (200..300).contains(&status) || status == METHOD_NOT_ALLOWED
}
