//! Application configuration.
//!
//! Centralized configuration for the invoice extractor frontend.
//! The API base URL can be overridden at build time via `INVOICE_API_URL`;
//! everything else is a compile-time constant.

/// Extraction API base URL used when `INVOICE_API_URL` is not set.
///
/// The default matches the extraction server's local development port.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Path of the processing endpoint on the extraction server.
pub const PROCESS_PATH: &str = "/process";

/// File extensions the picker accepts.
///
/// Client-side filter only; the server does its own validation.
pub const ACCEPTED_EXTENSIONS: [&str; 8] = [
    "pdf", "png", "jpg", "jpeg", "tiff", "tif", "bmp", "webp",
];

/// Resolve the extraction API base URL.
///
/// Reads the `INVOICE_API_URL` environment variable at build time and falls
/// back to [`DEFAULT_API_URL`].
pub fn api_base_url() -> &'static str {
    option_env!("INVOICE_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Full URL of the processing endpoint for the given base URL.
///
/// A single trailing slash on the base is stripped before [`PROCESS_PATH`]
/// is appended.
pub fn process_endpoint(base_url: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{}{}", base, PROCESS_PATH)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attr() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_without_trailing_slash() {
        assert_eq!(
            process_endpoint("http://localhost:8000"),
            "http://localhost:8000/process"
        );
    }

    #[test]
    fn test_endpoint_strips_single_trailing_slash() {
        assert_eq!(
            process_endpoint("http://localhost:8000/"),
            "http://localhost:8000/process"
        );
        // Only one slash is stripped
        assert_eq!(
            process_endpoint("http://localhost:8000//"),
            "http://localhost:8000//process"
        );
    }

    #[test]
    fn test_endpoint_for_remote_base() {
        assert_eq!(
            process_endpoint("https://api.example.com/extract/"),
            "https://api.example.com/extract/process"
        );
    }

    #[test]
    fn test_accept_attr_lists_all_extensions() {
        let attr = accept_attr();
        assert_eq!(attr, ".pdf,.png,.jpg,.jpeg,.tiff,.tif,.bmp,.webp");
    }
}
