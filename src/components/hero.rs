//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Invoice Data Extraction"</h1>
            <p class="subtitle">
                "Upload an invoice and let the extraction service pull out vendor, "
                "invoice and payment details. Supports PDF and common image formats."
            </p>
        </div>
    }
}
