//! Application configuration.
//!
//! Two external values drive the app: the webhook receiving uploads and the
//! dashboard the user is sent to afterwards. Both resolve from the hosting
//! environment once at start-up, falling back to fixed defaults when unset
//! or blank.

use serde::{Deserialize, Serialize};

/// Environment key for the upload webhook.
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Environment key for the dashboard link.
pub const DASHBOARD_URL_VAR: &str = "DASHBOARD_URL";

/// Local automation webhook used during development.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook-test/upload-expense";

/// Shared expense spreadsheet.
pub const DEFAULT_DASHBOARD_URL: &str =
    "https://docs.google.com/spreadsheets/d/1CxrFIACqAUA7uu7fivSMhzzHtaIfcpxcIVr4NxnCObo/edit";

/// Resolved configuration, injected into the upload client and the views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub webhook_url: String,
    pub dashboard_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            dashboard_url: DEFAULT_DASHBOARD_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolve each key through `lookup`, keeping the default for missing or
    /// blank values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            webhook_url: resolve(WEBHOOK_URL_VAR, DEFAULT_WEBHOOK_URL),
            dashboard_url: resolve(DASHBOARD_URL_VAR, DEFAULT_DASHBOARD_URL),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
