//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="app-icon">"💸"</div>
            <h1>"Track Your Expenses"</h1>
            <p class="subtitle">"Upload receipts and let AI categorize them automatically"</p>
            <div class="pills">
                <span class="pill">"✨ AI-Powered"</span>
                <span class="pill">"📊 Auto-Categorize"</span>
                <span class="pill">"☁️ Cloud Backup"</span>
            </div>
        </div>
    }
}
