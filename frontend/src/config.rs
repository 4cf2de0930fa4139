//! Application configuration.
//!
//! The webhook and dashboard URLs come from the build environment (see
//! `build.rs`), everything else is a fixed presentation constant.

use expense_tracker::config::{AppConfig, DASHBOARD_URL_VAR, WEBHOOK_URL_VAR};

/// Application name, used for the document title.
pub const APP_NAME: &str = "AI Expense Tracker";

/// Source repository linked from the welcome card.
pub const PROJECT_URL: &str = "https://github.com/matiasvallejosdev/ai-expense-tracker-n8n";

/// Google Drive folder the automation reads statements from.
pub const DRIVE_FOLDER_ID: &str = "16G0cnl6PA_ds68Q-sj4-E71sdmt8K0Jp";

/// Google Sheets template the automation appends to.
pub const SHEET_TEMPLATE_ID: &str = "1CxrFIACqAUA7uu7fivSMhzzHtaIfcpxcIVr4NxnCObo";

/// Cosmetic progress: interval between ticks (ms).
pub const PROGRESS_TICK_MS: u32 = 200;

/// Cosmetic progress: percentage added per tick.
pub const PROGRESS_STEP: u8 = 10;

/// Cosmetic progress: ceiling while waiting for the webhook.
pub const PROGRESS_CEILING: u8 = 90;

/// Pause on a full progress bar before showing the success step (ms).
pub const COMPLETE_DELAY_MS: u32 = 500;

/// How long a notice stays on screen (ms).
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Notices kept on screen at once.
pub const MAX_NOTICES: usize = 3;

/// Confetti pieces on the success step.
pub const CONFETTI_COUNT: usize = 30;

/// Confetti duration (ms).
pub const CONFETTI_DURATION_MS: u32 = 3_000;

pub fn drive_folder_url() -> String {
    format!("https://drive.google.com/drive/folders/{}", DRIVE_FOLDER_ID)
}

pub fn sheet_template_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{}/edit", SHEET_TEMPLATE_ID)
}

pub fn sheet_copy_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{}/copy", SHEET_TEMPLATE_ID)
}

/// Resolve the configuration baked in at build time.
pub fn load_config() -> AppConfig {
    AppConfig::from_lookup(|key| {
        let value = match key {
            WEBHOOK_URL_VAR => option_env!("WEBHOOK_URL"),
            DASHBOARD_URL_VAR => option_env!("DASHBOARD_URL"),
            _ => None,
        };
        value.map(str::to_owned)
    })
}
