//! Production configuration constants.
//!
//! These values define the wire contract with the training backend and the
//! HTTP client tuning. They are referenced throughout the codebase and in
//! tests to ensure consistency.

// =============================================================================
// Training Endpoint Contract
// =============================================================================

/// Path of the training upload endpoint, relative to the API base.
///
/// One multipart POST is issued here per donated image.
pub const TRAIN_ENDPOINT_PATH: &str = "/api/train";

/// Multipart field name carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

/// Multipart field name carrying the user-supplied label.
///
/// The same label is attached to every file of a submission.
pub const LABEL_FIELD: &str = "label";

// =============================================================================
// HTTP Client Tuning
// =============================================================================

/// Per-request timeout in seconds (native targets only).
///
/// On wasm the browser's fetch API owns timeout behavior, so this is not
/// applied there.
pub const UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept alive per host for connection reuse.
///
/// A submission fires every upload at once against a single host, so pooling
/// matters more here than the request count would suggest.
pub const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

// =============================================================================
// File Handling
// =============================================================================

/// Fallback MIME type for files whose extension is not a known image format.
pub const FALLBACK_MIME: &str = "application/octet-stream";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_path_is_absolute() {
        // Joined against a base URL, so it must start at the root
        assert!(TRAIN_ENDPOINT_PATH.starts_with('/'));
    }

    #[test]
    fn test_field_names_match_wire_contract() {
        assert_eq!(IMAGE_FIELD, "image");
        assert_eq!(LABEL_FIELD, "label");
    }
}
