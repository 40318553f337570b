//! HTTP client for the training endpoint.
//!
//! Wraps reqwest to post one multipart form per donated image. reqwest works
//! on both native and wasm targets:
//! - Native: hyper with rustls-tls for HTTPS
//! - WASM: the browser's fetch() API internally
//!
//! The client is pooled for connection reuse: a submission fires all of its
//! uploads at the same host at once, so keeping connections warm matters.

use crate::config::{
    IMAGE_FIELD, LABEL_FIELD, MAX_IDLE_CONNECTIONS_PER_HOST, TRAIN_ENDPOINT_PATH,
    UPLOAD_TIMEOUT_SECS,
};
use crate::error::UploadError;
use crate::upload::ImageFile;
use once_cell::sync::Lazy;
use tracing::debug;

/// Global HTTP client for connection pooling.
///
/// reqwest::Client pools connections internally, so one shared client is much
/// cheaper than a client per request.
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    #[cfg(not(target_arch = "wasm32"))]
    {
        reqwest::Client::builder()
            .user_agent("Sonotrain/0.1.0 (training-image donation client)")
            .timeout(std::time::Duration::from_secs(UPLOAD_TIMEOUT_SECS))
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()
            .expect("Failed to build HTTP client")
    }
    #[cfg(target_arch = "wasm32")]
    {
        // The browser owns timeouts and pooling for fetch()
        reqwest::Client::new()
    }
});

/// Client bound to one deployment's training endpoint.
///
/// Cloning is cheap: the underlying reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    train_url: url::Url,
}

impl UploadClient {
    /// Resolve the training endpoint against an API base such as
    /// `https://sonotrain.example` or `http://localhost:8000`.
    pub fn new(api_base: &str) -> Result<Self, UploadError> {
        let base = url::Url::parse(api_base)
            .map_err(|e| UploadError::InvalidEndpoint(format!("{}: {}", api_base, e)))?;

        // Ensure HTTP or HTTPS scheme
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(UploadError::InvalidEndpoint(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                base.scheme()
            )));
        }

        let train_url = base
            .join(TRAIN_ENDPOINT_PATH)
            .map_err(|e| UploadError::InvalidEndpoint(e.to_string()))?;

        Ok(Self {
            http: HTTP_CLIENT.clone(),
            train_url,
        })
    }

    /// Endpoint this client posts to.
    pub fn train_url(&self) -> &url::Url {
        &self.train_url
    }

    /// Upload one image under the shared label and parse the JSON response.
    ///
    /// The response shape is owned by the backend; it stays an opaque
    /// [`serde_json::Value`] here.
    pub async fn upload_image(
        &self,
        file: &ImageFile,
        label: &str,
    ) -> Result<serde_json::Value, UploadError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime)
            .map_err(|e| UploadError::RequestBuild(format!("{}: {}", file.name, e)))?;

        let form = reqwest::multipart::Form::new()
            .part(IMAGE_FIELD, part)
            .text(LABEL_FIELD, label.to_string());

        debug!(
            "⬆️ Uploading '{}' ({} bytes) labelled '{}'",
            file.name,
            file.bytes.len(),
            label
        );

        let response = self
            .http
            .post(self.train_url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::RequestFailed(format!("Failed to upload {}: {}", file.name, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::BadStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| UploadError::InvalidResponse(format!("{}: {}", file.name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_train_endpoint() {
        let client = UploadClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.train_url().as_str(), "http://localhost:8000/api/train");
    }

    #[test]
    fn test_rejects_malformed_base() {
        let err = UploadClient::new("not a url").unwrap_err();
        assert!(matches!(err, UploadError::InvalidEndpoint(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = UploadClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, UploadError::InvalidEndpoint(_)));
    }
}
