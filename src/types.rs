//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Processing Method** - extraction strategy sent with the request
//! - **Extraction Result** - normalized server response and field access
//! - **Display Helpers** - formatting shared by components and exports

use serde::{Deserialize, Serialize};
use serde_json::Value;

// =============================================================================
// Processing Method
// =============================================================================

/// Extraction strategy forwarded to the server.
///
/// Serialized into the `processing_method` form field; it selects a request
/// parameter and has no local semantic effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMethod {
    /// AI-based extraction.
    Ai,
    /// Traditional OCR-based extraction.
    Traditional,
}

impl ProcessingMethod {
    /// Wire value for the `processing_method` form field.
    pub fn as_param(&self) -> &'static str {
        match self {
            ProcessingMethod::Ai => "ai",
            ProcessingMethod::Traditional => "traditional",
        }
    }

    /// Label shown next to the selector radio button.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingMethod::Ai => "AI extraction",
            ProcessingMethod::Traditional => "Traditional OCR",
        }
    }
}

// =============================================================================
// Extraction Result
// =============================================================================

/// Recognized scalar fields of `extracted_data`: (JSON key, display label).
///
/// The order fixes both the result grid and the CSV export rows; together
/// with `dates_found` these are the nine recognized keys.
pub const INVOICE_FIELDS: [(&str, &str); 8] = [
    ("vendor_name", "Vendor Name"),
    ("vendor_email", "Vendor Email"),
    ("vendor_phone", "Vendor Phone"),
    ("invoice_number", "Invoice Number"),
    ("invoice_date", "Invoice Date"),
    ("customer_number", "Customer Number"),
    ("vat_number", "VAT Number"),
    ("total_amount", "Total Amount"),
];

/// Placeholder rendered for fields the server did not return.
pub const MISSING_VALUE: &str = "Not found";

/// Typed view of the recognized `extracted_data` keys.
///
/// `Default` doubles as the all-null mapping substituted when a response
/// arrives without `extracted_data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    pub vendor_name: Option<String>,
    pub vendor_email: Option<String>,
    pub vendor_phone: Option<String>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
    pub customer_number: Option<String>,
    pub vat_number: Option<String>,
    pub total_amount: Option<String>,
    #[serde(default)]
    pub dates_found: Vec<String>,
}

/// Normalized response from the extraction endpoint.
///
/// Wraps the full (possibly patched) JSON object, so the JSON export
/// reproduces exactly what was stored. Accessors read the recognized fields
/// out of the object the same lenient way the result grid renders them:
/// strings pass through, bare numbers are formatted, anything else counts
/// as missing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractionResult {
    raw: Value,
}

impl ExtractionResult {
    /// Wrap an already-normalized response object.
    ///
    /// Callers must have ensured `extracted_data` is present as an object;
    /// the normalization in `services::extract` is the one place that does.
    pub(crate) fn from_normalized(raw: Value) -> Self {
        Self { raw }
    }

    /// The full normalized object.
    pub fn as_value(&self) -> &Value {
        &self.raw
    }

    /// Scalar field from `extracted_data`, coerced to display text.
    pub fn field(&self, key: &str) -> Option<String> {
        coerce_text(self.raw.get("extracted_data")?.get(key)?)
    }

    /// Ordered list of date strings found in the document.
    pub fn dates_found(&self) -> Vec<String> {
        self.raw
            .get("extracted_data")
            .and_then(|data| data.get("dates_found"))
            .and_then(Value::as_array)
            .map(|dates| dates.iter().filter_map(coerce_text).collect())
            .unwrap_or_default()
    }

    /// `processing_method` metadata, when the server reported it.
    pub fn processing_method(&self) -> Option<String> {
        self.raw.get("processing_method").and_then(coerce_text)
    }

    /// Overall confidence score, when the server reported one.
    pub fn confidence(&self) -> Option<f64> {
        self.raw.get("confidence").and_then(Value::as_f64)
    }

    /// Name of the processed file, when the server echoed it back.
    pub fn source_filename(&self) -> Option<String> {
        self.raw.get("filename").and_then(coerce_text)
    }

    /// Size of the processed file in bytes, when reported.
    pub fn file_size_bytes(&self) -> Option<u64> {
        self.raw.get("file_size_bytes").and_then(Value::as_u64)
    }

    /// Server-side processing timestamp, when reported.
    pub fn processing_timestamp(&self) -> Option<String> {
        self.raw.get("processing_timestamp").and_then(coerce_text)
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

// =============================================================================
// Display Helpers
// =============================================================================

/// Format a byte count for display using 1024-based units.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_processing_method_params() {
        assert_eq!(ProcessingMethod::Ai.as_param(), "ai");
        assert_eq!(ProcessingMethod::Traditional.as_param(), "traditional");
    }

    #[test]
    fn test_processing_method_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(ProcessingMethod::Traditional).unwrap(),
            json!("traditional")
        );
    }

    #[test]
    fn test_default_extracted_data_has_all_nine_keys() {
        let value = serde_json::to_value(ExtractedData::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 9);
        for (key, _) in INVOICE_FIELDS {
            assert!(object[key].is_null(), "{} should default to null", key);
        }
        assert_eq!(object["dates_found"], json!([]));
    }

    #[test]
    fn test_field_access_coerces_numbers() {
        let result = ExtractionResult::from_normalized(json!({
            "extracted_data": {
                "vendor_name": "Acme Co",
                "total_amount": 123.45,
                "invoice_number": null,
                "dates_found": ["2024-01-01"]
            }
        }));

        assert_eq!(result.field("vendor_name").as_deref(), Some("Acme Co"));
        assert_eq!(result.field("total_amount").as_deref(), Some("123.45"));
        assert_eq!(result.field("invoice_number"), None);
        assert_eq!(result.field("vendor_email"), None);
        assert_eq!(result.dates_found(), vec!["2024-01-01".to_string()]);
    }

    #[test]
    fn test_metadata_accessors() {
        let result = ExtractionResult::from_normalized(json!({
            "extracted_data": {},
            "processing_method": "ai",
            "confidence": 0.87,
            "filename": "invoice.pdf",
            "file_size_bytes": 20480,
            "processing_timestamp": "2024-01-15T09:30:00Z"
        }));

        assert_eq!(result.processing_method().as_deref(), Some("ai"));
        assert_eq!(result.confidence(), Some(0.87));
        assert_eq!(result.source_filename().as_deref(), Some("invoice.pdf"));
        assert_eq!(result.file_size_bytes(), Some(20480));
        assert_eq!(
            result.processing_timestamp().as_deref(),
            Some("2024-01-15T09:30:00Z")
        );
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
