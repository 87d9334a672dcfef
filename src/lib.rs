//! Invoice Extractor - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading an invoice document and rendering
//! the structured data returned by the extraction API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (API endpoint badge)                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file picker, method, submit)            │
//! │  └── ResultsSection (when a result is stored)               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - API endpoint resolution and accepted file types
//! - [`types`] - Common types (ExtractionResult, ProcessingMethod, etc.)
//! - [`workflow`] - WorkflowState record and its pure transitions
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - External interaction (extraction request, exports)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{ExtractedData, ExtractionResult, ProcessingMethod};

// Workflow
pub use workflow::{RequestToken, WorkflowState, NO_FILE_MESSAGE};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Invoice Extractor - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Invoice Extractor"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application: one workflow record plus the
    // processing-method selector
    let (state, set_state) = create_signal(WorkflowState::<File>::new());
    let (method, set_method) = create_signal(ProcessingMethod::Ai);

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <UploadSection
                state=state
                set_state=set_state
                method=method
                set_method=set_method
            />

            // Results section (appears after a successful extraction)
            <Show
                when=move || state.with(|s| s.result.is_some())
                fallback=|| view! { }
            >
                <ResultsSection state=state set_state=set_state/>
            </Show>
        </div>

        <Footer/>
    }
}
