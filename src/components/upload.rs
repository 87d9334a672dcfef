//! Invoice upload component.
//!
//! Handles file selection, the processing-method selector and the submit
//! that drives one extraction request. All state changes go through the
//! [`WorkflowState`] transitions; this component only wires DOM events and
//! the async request task to them.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::config::{accept_attr, api_base_url};
use crate::services::extract_invoice;
use crate::types::{format_file_size, ProcessingMethod};
use crate::workflow::WorkflowState;

#[component]
pub fn UploadSection(
    state: ReadSignal<WorkflowState<File>>,
    set_state: WriteSignal<WorkflowState<File>>,
    method: ReadSignal<ProcessingMethod>,
    set_method: WriteSignal<ProcessingMethod>,
) -> impl IntoView {
    // Handler for file selection (an empty list means the picker was
    // cancelled and the previous choice cleared)
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));

        match &file {
            Some(file) => log::info!(
                "📄 Selected {} ({})",
                file.name(),
                format_file_size(file.size() as u64)
            ),
            None => log::info!("📄 File selection cleared"),
        }

        set_state.update(|s| s.select_file(file));
    };

    // Handler for clicking the drop zone
    let trigger_file_input = move |ev: web_sys::MouseEvent| {
        // Clicks bubbling back from the hidden input must not re-open the picker
        let from_input = ev
            .target()
            .map(|target| target.dyn_ref::<HtmlInputElement>().is_some())
            .unwrap_or(false);
        if from_input {
            return;
        }

        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("fileInput") {
                    if let Some(file_input) = input.dyn_ref::<HtmlInputElement>() {
                        file_input.click();
                    }
                }
            }
        }
    };

    // Handler for the submit button
    let on_submit = move |_| {
        let Some((file, token)) = set_state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let method = method.get();
        log::info!("📤 Uploading {} for {} extraction...", file.name(), method.as_param());

        spawn_local(async move {
            let outcome = extract_invoice(file, Some(method), api_base_url()).await;

            match &outcome {
                Ok(_) => log::info!("✅ Extraction finished"),
                Err(e) => log::error!("❌ {}", e),
            }

            if set_state.try_update(|s| s.settle(token, outcome)) == Some(false) {
                log::warn!("⏭️ Discarded settlement of a superseded request");
            }
        });
    };

    view! {
        <div class="upload-section" id="uploadZone" on:click=trigger_file_input>
            <div class="upload-icon">"📄"</div>
            <div class="upload-text">
                {move || if state.with(|s| s.loading) {
                    "⏳ Extracting invoice data..."
                } else {
                    "Drop an invoice here"
                }}
            </div>

            <Show
                when=move || state.with(|s| s.file.is_some())
                fallback=|| view! { }
            >
                <div class="selected-file">
                    {move || state.with(|s| {
                        s.file.as_ref().map(|file| {
                            format!("{} ({})", file.name(), format_file_size(file.size() as u64))
                        })
                    })}
                </div>
            </Show>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { }
            >
                <div class="upload-hint">"or click to choose a file"</div>
                <div class="upload-hint mt-20">
                    "Supported formats: PDF, PNG, JPG, JPEG, TIFF, BMP, WebP"
                </div>
            </Show>

            <input
                type="file"
                id="fileInput"
                accept=accept_attr()
                style="display:none"
                on:change=on_file_change
            />
        </div>

        <div class="upload-controls">
            <div class="method-group">
                <label class="method-option">
                    <input
                        type="radio"
                        name="processing_method"
                        prop:checked=move || method.get() == ProcessingMethod::Ai
                        on:change=move |_| set_method.set(ProcessingMethod::Ai)
                    />
                    <span>{ProcessingMethod::Ai.label()}</span>
                </label>
                <label class="method-option">
                    <input
                        type="radio"
                        name="processing_method"
                        prop:checked=move || method.get() == ProcessingMethod::Traditional
                        on:change=move |_| set_method.set(ProcessingMethod::Traditional)
                    />
                    <span>{ProcessingMethod::Traditional.label()}</span>
                </label>
            </div>

            <button
                class="btn btn-primary"
                id="submitBtn"
                on:click=on_submit
                disabled=move || state.with(|s| s.loading)
            >
                {move || if state.with(|s| s.loading) {
                    "⏳ Processing..."
                } else {
                    "Extract Data"
                }}
            </button>
        </div>

        <Show
            when=move || state.with(|s| s.error.is_some())
            fallback=|| view! { }
        >
            <div class="error-message">
                {move || state.with(|s| s.error.clone()).unwrap_or_default()}
            </div>
        </Show>
    }
}
