use leptos::*;

use crate::config::api_base_url;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"INVOICE EXTRACTOR"</a>
                <span class="badge">{api_base_url()}</span>
            </div>
        </header>
    }
}
