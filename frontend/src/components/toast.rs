//! Toast notices.
//!
//! [`Toasts`] is provided once by the wizard and pushed to from any step.
//! Notices expire on their own after [`NOTICE_TIMEOUT_MS`] or when
//! dismissed.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_NOTICES, NOTICE_TIMEOUT_MS};
use crate::types::Notice;

/// Handle to the notice stack.
#[derive(Clone, Copy)]
pub struct Toasts {
    notices: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    /// Create the stack and provide it to descendants.
    pub fn provide() -> Self {
        let toasts = Self {
            notices: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        };
        provide_context(toasts);
        toasts
    }

    pub fn use_toasts() -> Self {
        expect_context::<Self>()
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        log::debug!("Notice: {} - {}", notice.title, notice.description);
        self.notices.update(|notices| {
            notices.push((id, notice));
            if notices.len() > MAX_NOTICES {
                notices.remove(0);
            }
        });

        let toasts = *self;
        Timeout::new(NOTICE_TIMEOUT_MS, move || toasts.dismiss(id)).forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.try_update(|notices| notices.retain(|(i, _)| *i != id));
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toasts = Toasts::use_toasts();

    view! {
        <div class="toast-viewport">
            <For
                each=move || toasts.notices.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=notice.variant.css_class() role="status">
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-description">{notice.description}</div>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
