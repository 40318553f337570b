//! Error types for sonotrain-core.

use thiserror::Error;

/// Errors that can occur while preparing or running training uploads.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// Submission contained no files
    #[error("No images selected")]
    EmptySubmission,
    /// Submission label was empty or whitespace
    #[error("Label must not be blank")]
    BlankLabel,
    /// API base URL could not be parsed or the endpoint path joined
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Multipart request could not be assembled
    #[error("Failed to build request: {0}")]
    RequestBuild(String),
    /// Request failed at the network level
    #[error("Upload failed: {0}")]
    RequestFailed(String),
    /// Server answered with a non-success status
    #[error("Server rejected upload: HTTP {status}")]
    BadStatus { status: u16 },
    /// Response body was not valid JSON
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

/// Convert from UploadError to String for status display
impl From<UploadError> for String {
    fn from(err: UploadError) -> String {
        err.to_string()
    }
}

/// Convert from String to UploadError for callback compatibility
impl From<String> for UploadError {
    fn from(s: String) -> Self {
        UploadError::RequestFailed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_includes_code() {
        let err = UploadError::BadStatus { status: 503 };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_string_round_trip_maps_to_request_failure() {
        let err: UploadError = "connection reset".to_string().into();
        assert!(matches!(err, UploadError::RequestFailed(_)));
        let msg: String = err.into();
        assert!(msg.contains("connection reset"));
    }
}
