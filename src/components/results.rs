//! Results section: the extracted field grid and export controls.
//!
//! Rendered once a result is stored. The grid always shows the full set of
//! recognized fields, with gaps rendered as the fixed placeholder, so its
//! shape never depends on how much the server managed to extract.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::services::{trigger_download, ExportFormat};
use crate::types::{format_file_size, ExtractionResult, INVOICE_FIELDS, MISSING_VALUE};
use crate::workflow::WorkflowState;

#[component]
pub fn ResultsSection(
    state: ReadSignal<WorkflowState<File>>,
    set_state: WriteSignal<WorkflowState<File>>,
) -> impl IntoView {
    let result = move || state.with(|s| s.result.clone());

    let export = move |format: ExportFormat| {
        let Some(result) = result() else {
            return;
        };
        let file = format.encode(&result);
        log::info!("💾 Exporting {}", file.filename);
        if let Err(e) = trigger_download(&file) {
            log::error!("❌ Export failed: {}", e);
        }
    };
    let on_export_json = move |_| export(ExportFormat::Json);
    let on_export_csv = move |_| export(ExportFormat::Csv);

    // Reset back to the upload zone; clearing the input value lets the
    // same file be picked again with a fresh change event
    let on_reset = move |_| {
        log::info!("🔄 Resetting for another invoice");
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("fileInput"))
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value("");
        }
        set_state.update(|s| s.select_file(None));
    };

    view! {
        <div class="results-section" id="resultsSection">
            <div class="results-header">
                <div class="results-title">"📋 Extracted Data"</div>
                <button class="btn btn-secondary" id="resetBtn" on:click=on_reset>
                    "Process another invoice"
                </button>
            </div>

            {move || result().map(|result| view! { <ResultMeta result=result/> })}

            <div class="field-grid" id="fieldGrid">
                {move || {
                    let result = result();
                    INVOICE_FIELDS
                        .into_iter()
                        .map(|(key, label)| {
                            let value = result
                                .as_ref()
                                .and_then(|r| r.field(key))
                                .unwrap_or_else(|| MISSING_VALUE.to_string());
                            let missing = value == MISSING_VALUE;
                            view! {
                                <div class="field-item">
                                    <div class="field-label">{label}</div>
                                    <div class="field-value" class:missing=missing>{value}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="dates-section">
                <div class="field-label">"Dates Found"</div>
                {move || {
                    let dates = result().map(|r| r.dates_found()).unwrap_or_default();
                    if dates.is_empty() {
                        view! { <div class="field-value missing">{MISSING_VALUE}</div> }
                            .into_view()
                    } else {
                        view! {
                            <ul class="dates-list">
                                {dates
                                    .into_iter()
                                    .map(|date| view! { <li>{date}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>

            <div class="results-footer">
                <button class="btn btn-primary" id="exportJsonBtn" on:click=on_export_json>
                    {ExportFormat::Json.label()}
                </button>
                <button class="btn btn-primary" id="exportCsvBtn" on:click=on_export_csv>
                    {ExportFormat::Csv.label()}
                </button>
            </div>
        </div>
    }
}

/// Metadata strip above the grid; each entry only when the server sent it.
#[component]
fn ResultMeta(result: ExtractionResult) -> impl IntoView {
    let entries = meta_entries(&result);
    let has_entries = !entries.is_empty();

    view! {
        <Show when=move || has_entries fallback=|| view! { }>
            <div class="result-meta">
                {entries
                    .clone()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <span class="meta-item">
                                <span class="meta-label">{label} ": "</span>
                                {value}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

/// Labeled metadata entries, keeping only what the server reported.
fn meta_entries(result: &ExtractionResult) -> Vec<(&'static str, String)> {
    [
        ("File", result.source_filename()),
        ("Size", result.file_size_bytes().map(format_file_size)),
        ("Method", result.processing_method()),
        (
            "Confidence",
            result.confidence().map(|c| format!("{:.0}%", c * 100.0)),
        ),
        ("Processed", result.processing_timestamp()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|value| (label, value)))
    .collect()
}
