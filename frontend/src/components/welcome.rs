//! Step 1: welcome card.

use expense_tracker::{AppConfig, Wizard};
use leptos::*;

use crate::components::{Footer, Hero, SetupGuide};
use crate::config::PROJECT_URL;
use crate::types::ReceiptFile;

#[component]
pub fn WelcomeStep(wizard: RwSignal<Wizard<ReceiptFile>>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let (guide_open, set_guide_open) = create_signal(false);

    let on_get_started = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.get_started()) {
            log::warn!("⚠️ {}", e);
        }
    };

    view! {
        <div class="card welcome fade-in">
            <a href=PROJECT_URL class="corner-link" target="_blank" rel="noopener noreferrer" aria-label="Source code">
                "GitHub"
            </a>

            <Hero/>

            <button class="btn btn-primary btn-block" on:click=on_get_started>
                "Get Started"
            </button>

            <div class="secondary-actions">
                <a href=config.dashboard_url class="btn btn-outline btn-block" target="_blank" rel="noopener noreferrer">
                    "📊 View Dashboard"
                </a>
                <button class="btn btn-ghost btn-block" on:click=move |_| set_guide_open.set(true)>
                    "📖 View Setup Guide"
                </button>
            </div>

            <Footer/>
        </div>

        <SetupGuide open=guide_open set_open=set_guide_open/>
    }
}
