//! HTTP client for the receipt webhook.

use chrono::Utc;
use expense_tracker::upload::FIELD_FILE;
use expense_tracker::{
    interpret_response, is_reachable, AppConfig, FileInfo, TransportError, UploadPayload, UploadResult,
};
use gloo_net::http::Request;
use gloo_utils::errors::JsError;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::types::ReceiptFile;

/// Posts receipts to the configured webhook.
///
/// One request per call: no retry, no timeout, no idempotency key.
#[derive(Clone, Debug)]
pub struct WebhookClient {
    endpoint: String,
}

impl WebhookClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.webhook_url.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload a receipt as multipart form data.
    pub async fn upload(&self, file: &ReceiptFile) -> UploadResult {
        let payload = UploadPayload::new(file, Utc::now());

        let form = build_form(file, &payload).map_err(|e| {
            TransportError::network(format!("Failed to build form data: {}", js_error_message(e)))
        })?;

        log::info!("📤 Uploading {} ({} bytes) to {}", payload.file_name, payload.file_size, self.endpoint);

        let request = Request::post(&self.endpoint)
            .body(form)
            .map_err(|e| TransportError::network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::error!("❌ Webhook unreachable: {}", e);
            TransportError::network(e.to_string())
        })?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;

        let result = interpret_response(status, &status_text, &body, &payload);
        match &result {
            Ok(receipt) => log::info!(
                "✅ Webhook accepted {} ({})",
                receipt.data.file_name,
                serde_json::to_string(&receipt.data).unwrap_or_default()
            ),
            Err(e) => log::error!("❌ Upload failed with status {}: {}", e.status_code(), e),
        }
        result
    }

    /// Check whether the webhook answers at all. Never fails.
    pub async fn probe(&self) -> bool {
        match Request::get(&self.endpoint).send().await {
            Ok(response) => {
                let reachable = is_reachable(response.status());
                log::debug!("Webhook probe: HTTP {} (reachable: {})", response.status(), reachable);
                reachable
            }
            Err(e) => {
                log::warn!("Webhook probe failed: {}", e);
                false
            }
        }
    }
}

fn build_form(file: &ReceiptFile, payload: &UploadPayload) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(FIELD_FILE, file.blob(), file.name())?;
    for (field, value) in payload.text_fields() {
        form.append_with_str(field, value)?;
    }
    Ok(form)
}

fn js_error_message(value: JsValue) -> String {
    match JsError::try_from(value) {
        Ok(error) => error.to_string(),
        Err(other) => other.to_string(),
    }
}
