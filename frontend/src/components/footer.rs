//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-credit">"Created by Matías Vallejos"</div>
            <div class="footer-links">
                <a href="https://buymeacoffee.com/matiasvallejosdev" class="footer-link" target="_blank" rel="noopener noreferrer">
                    "☕ buymeacoffee.com/matiasvallejosdev"
                </a>
                <a href="https://matiasvallejos.com" class="footer-link" target="_blank" rel="noopener noreferrer">
                    "🌐 matiasvallejos.com"
                </a>
                <a href="https://x.com/mativallejosdev" class="footer-link" target="_blank" rel="noopener noreferrer">
                    "𝕏 @mativallejosdev"
                </a>
            </div>
        </footer>
    }
}
