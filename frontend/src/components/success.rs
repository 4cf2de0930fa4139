//! Step 3: confirmation after a successful upload.

use chrono::Local;
use expense_tracker::{AppConfig, Wizard};
use gloo_timers::callback::Timeout;
use leptos::*;
use rand::Rng;

use crate::config::{CONFETTI_COUNT, CONFETTI_DURATION_MS};
use crate::types::ReceiptFile;

const CONFETTI_COLORS: &[&str] = &["#1f2937", "#374151", "#4b5563", "#6b7280", "#9ca3af"];

/// One falling confetti square.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f64,
    pub color: &'static str,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ConfettiPiece {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            delay_s: rng.gen_range(0.0..0.5),
            duration_s: rng.gen_range(2.0..4.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; background-color: {}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.color, self.delay_s, self.duration_s
        )
    }
}

pub fn confetti_burst(count: usize, rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..count).map(|_| ConfettiPiece::random(rng)).collect()
}

#[component]
pub fn SuccessStep(wizard: RwSignal<Wizard<ReceiptFile>>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    let file_name = wizard.with_untracked(|w| w.success_file_name().map(str::to_owned).unwrap_or_default());
    let file_id = wizard.with_untracked(|w| w.receipt().and_then(|r| r.data.file_id.clone()));
    let upload_time = Local::now().format("%b %-d, %Y, %-I:%M %p").to_string();

    let (show_confetti, set_show_confetti) = create_signal(true);
    let confetti = confetti_burst(CONFETTI_COUNT, &mut rand::thread_rng());
    let timer = Timeout::new(CONFETTI_DURATION_MS, move || {
        set_show_confetti.try_set(false);
    });
    on_cleanup(move || drop(timer));

    let on_upload_another = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.upload_another()) {
            log::warn!("⚠️ {}", e);
        }
    };

    view! {
        <Show when=move || show_confetti.get() fallback=|| view! {}>
            <div class="confetti-layer">
                {confetti
                    .iter()
                    .map(|piece| view! { <div class="confetti" style=piece.style()></div> })
                    .collect_view()}
            </div>
        </Show>

        <div class="card success zoom-in">
            <div class="success-icon">"✔"</div>
            <h1>"Receipt Processed!"</h1>

            <div class="summary">
                <div class="summary-row">
                    <div class="muted">"File name"</div>
                    <div class="file-name">{file_name}</div>
                </div>
                <div class="summary-row">
                    <div class="muted">"Upload time"</div>
                    <div>{upload_time}</div>
                </div>
                {file_id.map(|id| view! {
                    <div class="summary-row">
                        <div class="muted">"Reference"</div>
                        <div class="mono">{id}</div>
                    </div>
                })}
                <div class="pills">
                    <span class="pill">"☁️ Saved to Google Drive"</span>
                    <span class="pill">"📄 Added to spreadsheet"</span>
                </div>
            </div>

            <button class="btn btn-primary btn-block btn-large" on:click=on_upload_another>
                "📤 Upload Another"
            </button>
            <a href=config.dashboard_url class="btn btn-outline btn-block btn-large" target="_blank" rel="noopener noreferrer">
                "📊 View Dashboard"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_burst_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(confetti_burst(CONFETTI_COUNT, &mut rng).len(), 30);
    }

    #[test]
    fn test_pieces_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for piece in confetti_burst(200, &mut rng) {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!((0.0..0.5).contains(&piece.delay_s));
            assert!((2.0..4.0).contains(&piece.duration_s));
            assert!(CONFETTI_COLORS.contains(&piece.color));
        }
    }

    #[test]
    fn test_style() {
        let piece = ConfettiPiece {
            left_pct: 12.5,
            color: "#1f2937",
            delay_s: 0.25,
            duration_s: 3.0,
        };
        assert_eq!(
            piece.style(),
            "left: 12.50%; background-color: #1f2937; animation-delay: 0.25s; animation-duration: 3.00s;"
        );
    }
}
