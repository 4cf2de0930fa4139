//! Upload progress indicator.
//!
//! The fetch API reports no upload progress, so the bar is cosmetic: it
//! creeps up to [`PROGRESS_CEILING`] while the request runs and jumps to
//! 100 when the webhook answers.

use leptos::*;

use crate::config::{PROGRESS_CEILING, PROGRESS_STEP};

/// Next value of the cosmetic progress bar.
pub fn next_progress(current: u8) -> u8 {
    current.saturating_add(PROGRESS_STEP).min(PROGRESS_CEILING).max(current)
}

/// Status line matching the progress value.
pub fn progress_label(percent: u8) -> &'static str {
    if percent < 50 {
        "Uploading to secure storage..."
    } else {
        "AI is analyzing your receipt..."
    }
}

#[component]
pub fn ProgressIndicator(progress: ReadSignal<u8>) -> impl IntoView {
    view! {
        <div class="progress-section">
            <div class="progress-status">
                <span class="spinner"></span>
                <span>{move || progress_label(progress.get())}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%;", progress.get())
                ></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_stops_at_ceiling() {
        let mut value = 0;
        let mut ticks = 0;
        while value < PROGRESS_CEILING {
            value = next_progress(value);
            ticks += 1;
        }
        assert_eq!(value, 90);
        assert_eq!(ticks, 9);
        assert_eq!(next_progress(value), 90);
    }

    #[test]
    fn test_progress_never_goes_back() {
        assert_eq!(next_progress(100), 100);
    }

    #[test]
    fn test_label_switches_at_half() {
        assert_eq!(progress_label(40), "Uploading to secure storage...");
        assert_eq!(progress_label(50), "AI is analyzing your receipt...");
        assert_eq!(progress_label(100), "AI is analyzing your receipt...");
    }
}
