//! Setup guide dialog shown from the welcome step.

use leptos::*;

use crate::config::{drive_folder_url, sheet_copy_url, sheet_template_url, DRIVE_FOLDER_ID, SHEET_TEMPLATE_ID};

#[component]
pub fn SetupGuide(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| view! {}>
            <div class="dialog-overlay" on:click=move |_| set_open.set(false)>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <div class="dialog-header">
                        <h2>"Quick Setup Guide"</h2>
                        <button class="dialog-close" aria-label="Close" on:click=move |_| set_open.set(false)>
                            "✕"
                        </button>
                    </div>
                    <p class="dialog-description">
                        "Follow these steps to connect your Google Drive and Sheets for automatic expense tracking."
                    </p>

                    <section class="guide-section">
                        <div class="guide-title">"📂 Google Drive (Input Folder)"</div>
                        <p class="muted">"Upload your bank or credit card PDFs here."</p>
                        <a href=drive_folder_url() target="_blank" rel="noopener noreferrer" class="guide-link">
                            "Drive Folder — AI Expense Tracker Inputs ↗"
                        </a>
                        <div class="guide-id">"Folder ID: " {DRIVE_FOLDER_ID}</div>
                    </section>

                    <section class="guide-section">
                        <div class="guide-title">"📋 Google Sheets (Output Dashboard)"</div>
                        <p class="muted">"All parsed and categorized transactions are appended here."</p>
                        <a href=sheet_template_url() target="_blank" rel="noopener noreferrer" class="guide-link">
                            "Google Sheets Template — AI Expense Tracker ↗"
                        </a>
                        <a href=sheet_copy_url() target="_blank" rel="noopener noreferrer" class="guide-link strong">
                            "Make a Copy of the Template ↗"
                        </a>
                        <div class="guide-id">"Spreadsheet ID: " {SHEET_TEMPLATE_ID}</div>
                    </section>
                </div>
            </div>
        </Show>
    }
}
