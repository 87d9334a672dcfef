//! HTTP service for posting a document to the extraction endpoint.
//!
//! Builds the multipart request, performs the single POST and normalizes
//! the response into an [`ExtractionResult`] or a ready-to-render error
//! message. Nothing is thrown past this boundary.

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::process_endpoint;
use crate::types::{ExtractedData, ExtractionResult, ProcessingMethod};

/// Fixed error used when the response body is not a JSON object.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response format from server";

/// Upload `file` to the extraction API and normalize the response.
///
/// The sole suspension point of the workflow: resolves once the server has
/// answered or the transport failed. There is no local timeout and no
/// cancellation, the transport's own limits bound the wait.
pub async fn extract_invoice(
    file: File,
    method: Option<ProcessingMethod>,
    base_url: &str,
) -> Result<ExtractionResult, String> {
    let form_data =
        FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("Failed to append file: {:?}", e))?;
    if let Some(method) = method {
        form_data
            .append_with_str("processing_method", method.as_param())
            .map_err(|e| format!("Failed to append processing method: {:?}", e))?;
    }

    let url = process_endpoint(base_url);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Error processing invoice: {}", e))?;

    let ok = response.ok();
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Error processing invoice: {}", e))?;

    normalize_response(ok, status, &body)
}

/// Turn a raw response into the stored result or a user-facing error.
///
/// A success status can still fail here: a body that is not a JSON object
/// is rejected, and a body carrying `detail` is a server-reported failure
/// despite the 2xx. A missing or non-object `extracted_data` is replaced
/// with the all-null mapping instead of failing, so the field grid
/// downstream always has the full set of keys to render.
pub fn normalize_response(ok: bool, status: u16, body: &str) -> Result<ExtractionResult, String> {
    if !ok {
        return Err(format!("Server error ({}): {}", status, body));
    }

    let Ok(mut parsed) = serde_json::from_str::<Value>(body) else {
        return Err(INVALID_RESPONSE_MESSAGE.to_string());
    };
    let Some(object) = parsed.as_object_mut() else {
        return Err(INVALID_RESPONSE_MESSAGE.to_string());
    };

    if let Some(detail) = object.get("detail") {
        return Err(format!("Extraction failed: {}", detail_text(detail)));
    }

    if !object.get("extracted_data").is_some_and(Value::is_object) {
        object.insert("extracted_data".to_string(), empty_extracted_data());
    }

    Ok(ExtractionResult::from_normalized(parsed))
}

/// `detail` is a string in practice; anything else falls back to its JSON
/// rendering rather than a debug dump.
fn detail_text(detail: &Value) -> String {
    match detail {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn empty_extracted_data() -> Value {
    serde_json::to_value(ExtractedData::default()).unwrap_or_default()
}
