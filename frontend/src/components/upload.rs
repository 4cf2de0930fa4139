//! Step 2: receipt selection and submission.
//!
//! Handles click and drag & drop selection, the selected file card, and the
//! upload to the webhook. While the request runs the cosmetic progress bar
//! ticks and every other action on the step is disabled except leaving it.

use expense_tracker::{
    format_file_size, AppConfig, FileIcon, FileInfo, Step, SubmitOutcome, Wizard, ACCEPTED_EXTENSIONS,
};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::{next_progress, ProgressIndicator, Toasts};
use crate::config::{COMPLETE_DELAY_MS, PROGRESS_TICK_MS};
use crate::services::WebhookClient;
use crate::types::{Notice, ReceiptFile};

#[component]
pub fn UploadStep(wizard: RwSignal<Wizard<ReceiptFile>>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let toasts = Toasts::use_toasts();

    let (is_dragging, set_is_dragging) = create_signal(false);
    let (progress, set_progress) = create_signal(0u8);
    let file_input = create_node_ref::<html::Input>();
    let ticker = store_value(None::<Interval>);

    // Stop the cosmetic ticker if the step goes away mid-upload
    on_cleanup(move || {
        ticker.try_update_value(|t| t.take());
    });

    let selected = create_memo(move |_| wizard.with(|w| w.selected_file().cloned()));
    let is_submitting = create_memo(move |_| wizard.with(|w| w.is_submitting()));
    let can_submit = create_memo(move |_| wizard.with(|w| w.can_submit()));

    let handle_file = move |file: File| {
        let receipt = ReceiptFile::new(file);
        log::info!("📎 Selected {} ({}, {})", receipt.name(), receipt.mime_type(), format_file_size(receipt.size_bytes()));
        if let Some(Err(e)) = wizard.try_update(|w| w.select_file(receipt)) {
            log::warn!("⚠️ File rejected: {}", e);
            toasts.push(Notice::from_wizard_error(&e));
        }
    };

    let on_input_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file(file);
        }
        // Allow picking the same file again after a rejection
        input.set_value("");
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            handle_file(file);
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_remove = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.remove_file()) {
            toasts.push(Notice::from_wizard_error(&e));
        }
    };

    let on_back = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.back()) {
            log::warn!("⚠️ {}", e);
        }
    };

    let on_process = move |_| {
        let submission = match wizard.try_update(|w| w.begin_submit()) {
            Some(Ok(submission)) => submission,
            Some(Err(e)) => {
                toasts.push(Notice::from_wizard_error(&e));
                return;
            }
            None => return,
        };

        set_progress.set(0);
        ticker.set_value(Some(Interval::new(PROGRESS_TICK_MS, move || {
            set_progress.try_update(|p| *p = next_progress(*p));
        })));

        let client = WebhookClient::new(&config);
        spawn_local(async move {
            let result = client.upload(&submission.file).await;
            ticker.try_update_value(|t| t.take());

            if result.is_ok() {
                set_progress.try_set(100);
                TimeoutFuture::new(COMPLETE_DELAY_MS).await;
            } else {
                set_progress.try_set(0);
            }

            let receipt = result.as_ref().ok().cloned();
            match wizard.try_update(|w| w.finish_submit(submission.token, result)) {
                Some(SubmitOutcome::Completed) => {
                    if let Some(receipt) = receipt {
                        toasts.push(Notice::upload_succeeded(&receipt));
                    }
                }
                Some(SubmitOutcome::Failed(e)) => toasts.push(Notice::upload_failed(&e)),
                Some(SubmitOutcome::Discarded) | None => {
                    log::info!("Upload result arrived after leaving the step; ignored");
                }
            }
        });
    };

    view! {
        <div class="card upload slide-in">
            <div class="step-header">
                <button class="btn btn-icon" aria-label="Back" on:click=on_back>"←"</button>
                <div class="step-label">{Step::Upload.progress_label()}</div>
            </div>

            <Show
                when=move || selected.get().is_some()
                fallback=move || view! {
                    <div
                        class="upload-zone"
                        class:dragging=move || is_dragging.get()
                        on:click=open_picker
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <div class="upload-icon">"📤"</div>
                        <div class="upload-text">"Tap to upload or drag & drop"</div>
                        <div class="upload-hint">"PDF, JPG, PNG • Max 10MB"</div>
                        <input
                            type="file"
                            accept=ACCEPTED_EXTENSIONS
                            style="display:none"
                            node_ref=file_input
                            on:change=on_input_change
                        />
                    </div>
                }
            >
                {move || selected.get().map(|file| {
                    let icon = FileIcon::for_mime(file.mime_type());
                    view! {
                        <div class="file-card">
                            <div class=icon.css_class()>{icon.emoji()}</div>
                            <div class="file-info">
                                <div class="file-name">{file.name().to_string()}</div>
                                <div class="file-size">{format_file_size(file.size_bytes())}</div>
                            </div>
                            <button
                                class="btn btn-icon"
                                aria-label="Remove file"
                                disabled=move || is_submitting.get()
                                on:click=on_remove
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })}
            </Show>

            <Show when=move || is_submitting.get() fallback=|| view! {}>
                <ProgressIndicator progress=progress/>
            </Show>

            <button
                class="btn btn-primary btn-block btn-large"
                disabled=move || !can_submit.get()
                on:click=on_process
            >
                {move || if is_submitting.get() { "⏳ Processing..." } else { "Process Receipt" }}
            </button>

            <button class="link-button" on:click=on_back>
                "I'll do this later"
            </button>
        </div>
    }
}
