use dioxus::prelude::*;
use sonotrain_core::upload::UploadStatus;

/// Individual file row with upload status.
///
/// Failures are rendered with their reason instead of the file silently
/// never appearing.
#[component]
pub fn FileRow(file_name: String, status: UploadStatus) -> Element {
    let (row_class, status_text) = match &status {
        UploadStatus::Pending => ("st-file-row", "Uploading…".to_string()),
        UploadStatus::Succeeded(_) => ("st-file-row st-file-row--done", "Uploaded".to_string()),
        UploadStatus::Failed(reason) => (
            "st-file-row st-file-row--failed",
            format!("Failed: {}", reason),
        ),
    };

    rsx! {
        div { class: row_class,
            div { class: "st-file-name", "{file_name}" }
            div { class: "st-file-status", "{status_text}" }
        }
    }
}
