//! Expense Tracker - Frontend Rust/Leptos Application
//!
//! A WebAssembly wizard for uploading receipts to an expense-tracking
//! automation webhook.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ExpenseWizard (owns the Wizard signal and Toasts)          │
//! │  ├── WelcomeStep   (step 1)                                 │
//! │  ├── UploadStep    (step 2) ──▶ WebhookClient               │
//! │  ├── SuccessStep   (step 3)                                 │
//! │  └── ToastViewport                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration and presentation constants
//! - [`types`] - Browser file wrapper and notices
//! - [`components`] - UI components (steps, dialog, toasts, etc.)
//! - [`services`] - Webhook communication

use expense_tracker::{Step, Wizard};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    ReceiptFile,
    // Notices
    Notice, NoticeVariant,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the app - called from `main` by trunk.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("💸 Expense Tracker - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    log::info!("🔗 Webhook: {}", config.webhook_url);

    if cfg!(debug_assertions) {
        let client = WebhookClient::new(&config);
        spawn_local(async move {
            if !client.probe().await {
                log::warn!("⚠️ Webhook {} is not reachable", client.endpoint());
            }
        });
    }

    provide_context(config);

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main class="page">
                <Routes>
                    <Route path="/" view=ExpenseWizard/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ExpenseWizard() -> impl IntoView {
    // Wizard state for this page; lost on reload
    let wizard = create_rw_signal(Wizard::<ReceiptFile>::new());
    Toasts::provide();

    let step = create_memo(move |_| wizard.with(|w| w.step()));

    view! {
        <div class="wizard">
            {move || match step.get() {
                Step::Welcome => view! { <WelcomeStep wizard=wizard/> }.into_view(),
                Step::Upload => view! { <UploadStep wizard=wizard/> }.into_view(),
                Step::Success => view! { <SuccessStep wizard=wizard/> }.into_view(),
            }}
        </div>
        <ToastViewport/>
    }
}
