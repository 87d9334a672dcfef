//! Export encoders and client-side download plumbing.
//!
//! Each export format is a variant encoder behind one interface: it turns
//! the stored result into a named file body, which [`trigger_download`]
//! then materializes through a transient object URL. Encoding is pure, so
//! it is tested natively; only the download itself touches the DOM.

use chrono::{DateTime, Local};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::types::{ExtractionResult, INVOICE_FIELDS, MISSING_VALUE};

/// A file materialized client-side for download.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Available export encodings for a stored result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Full result object, pretty-printed.
    Json,
    /// Fixed field/value rows, one per recognized field.
    Csv,
}

impl ExportFormat {
    /// Encode `result` into a downloadable file named for the current time.
    pub fn encode(&self, result: &ExtractionResult) -> ExportFile {
        self.encode_at(result, Local::now())
    }

    /// Encode with an explicit clock, so tests can pin the filename.
    pub fn encode_at(&self, result: &ExtractionResult, now: DateTime<Local>) -> ExportFile {
        match self {
            ExportFormat::Json => ExportFile {
                filename: format!("invoice_data_{}.json", now.format("%Y-%m-%d_%H%M%S")),
                mime_type: "application/json",
                content: encode_json(result),
            },
            ExportFormat::Csv => ExportFile {
                filename: format!("invoice_data_{}.csv", now.format("%Y-%m-%d")),
                mime_type: "text/csv",
                content: encode_csv(result),
            },
        }
    }

    /// Label for the triggering button.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Json => "Export JSON",
            ExportFormat::Csv => "Export CSV",
        }
    }
}

/// Serialize the full stored object with stable indentation.
fn encode_json(result: &ExtractionResult) -> String {
    serde_json::to_string_pretty(result.as_value()).unwrap_or_default()
}

/// Fixed, ordered rows; the row count never depends on what the server
/// actually returned.
fn encode_csv(result: &ExtractionResult) -> String {
    let mut lines = vec!["Field,Value".to_string()];
    for (key, label) in INVOICE_FIELDS {
        lines.push(csv_row(label, result.field(key)));
    }

    let dates = result.dates_found();
    let dates_cell = (!dates.is_empty()).then(|| dates.join(", "));
    lines.push(csv_row("Dates Found", dates_cell));

    lines.push(csv_row("Processing Method", result.processing_method()));
    lines.push(csv_row(
        "Confidence",
        result.confidence().map(|c| format!("{:.2}", c)),
    ));

    let mut csv = lines.join("\n");
    csv.push('\n');
    csv
}

fn csv_row(label: &str, value: Option<String>) -> String {
    let value = value.unwrap_or_else(|| MISSING_VALUE.to_string());
    format!("{},{}", csv_escape(label), csv_escape(&value))
}

/// RFC 4180 quoting: fields containing commas, quotes or line breaks are
/// wrapped in quotes with embedded quotes doubled.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Materialize `file` as a browser download.
///
/// The object URL lives only for the synchronous click and is revoked
/// before returning.
pub fn trigger_download(file: &ExportFile) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(&file.content));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document available".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Anchor element has unexpected type".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);

    let body = document
        .body()
        .ok_or_else(|| "No document body".to_string())?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to attach anchor: {:?}", e))?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractionResult;
    use chrono::TimeZone;
    use serde_json::json;

    fn full_result() -> ExtractionResult {
        ExtractionResult::from_normalized(json!({
            "extracted_data": {
                "vendor_name": "Acme Co",
                "vendor_email": "billing@acme.test",
                "vendor_phone": "+49 30 123456",
                "invoice_number": "INV-2024-0042",
                "invoice_date": "2024-01-01",
                "customer_number": "C-1001",
                "vat_number": "DE123456789",
                "total_amount": "123.45",
                "dates_found": ["2024-01-01", "2024-01-31"]
            },
            "processing_method": "ai",
            "confidence": 0.87
        }))
    }

    fn empty_result() -> ExtractionResult {
        ExtractionResult::from_normalized(json!({
            "extracted_data": {
                "vendor_name": null,
                "vendor_email": null,
                "vendor_phone": null,
                "invoice_number": null,
                "invoice_date": null,
                "customer_number": null,
                "vat_number": null,
                "total_amount": null,
                "dates_found": []
            }
        }))
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 5).unwrap()
    }

    #[test]
    fn test_json_export_round_trips() {
        let result = full_result();
        let file = ExportFormat::Json.encode_at(&result, fixed_now());

        let parsed: serde_json::Value = serde_json::from_str(&file.content).unwrap();
        assert_eq!(&parsed, result.as_value());
        assert_eq!(file.mime_type, "application/json");
    }

    #[test]
    fn test_export_filenames_carry_prefix_and_date() {
        let result = full_result();

        let json = ExportFormat::Json.encode_at(&result, fixed_now());
        let csv = ExportFormat::Csv.encode_at(&result, fixed_now());

        assert_eq!(json.filename, "invoice_data_2024-01-15_093005.json");
        assert_eq!(csv.filename, "invoice_data_2024-01-15.csv");
    }

    #[test]
    fn test_csv_row_count_is_constant() {
        let full = ExportFormat::Csv.encode_at(&full_result(), fixed_now());
        let empty = ExportFormat::Csv.encode_at(&empty_result(), fixed_now());

        assert_eq!(full.content.lines().count(), 12);
        assert_eq!(empty.content.lines().count(), 12);
    }

    #[test]
    fn test_csv_starts_with_header_row() {
        let file = ExportFormat::Csv.encode_at(&full_result(), fixed_now());

        assert_eq!(file.content.lines().next(), Some("Field,Value"));
    }

    #[test]
    fn test_csv_renders_placeholder_for_missing_values() {
        let file = ExportFormat::Csv.encode_at(&empty_result(), fixed_now());

        assert!(file.content.contains("Vendor Name,Not found"));
        assert!(file.content.contains("Dates Found,Not found"));
        assert!(file.content.contains("Processing Method,Not found"));
        assert!(file.content.contains("Confidence,Not found"));
    }

    #[test]
    fn test_csv_joins_dates_and_quotes_the_cell() {
        let file = ExportFormat::Csv.encode_at(&full_result(), fixed_now());

        assert!(file
            .content
            .contains("Dates Found,\"2024-01-01, 2024-01-31\""));
    }

    #[test]
    fn test_csv_escapes_commas_and_quotes() {
        let result = ExtractionResult::from_normalized(json!({
            "extracted_data": {
                "vendor_name": "Acme, Inc. \"Europe\"",
                "dates_found": []
            }
        }));

        let file = ExportFormat::Csv.encode_at(&result, fixed_now());

        assert!(file
            .content
            .contains("Vendor Name,\"Acme, Inc. \"\"Europe\"\"\""));
    }

    #[test]
    fn test_csv_includes_metadata_rows() {
        let file = ExportFormat::Csv.encode_at(&full_result(), fixed_now());

        assert!(file.content.contains("Processing Method,ai"));
        assert!(file.content.contains("Confidence,0.87"));
    }
}
