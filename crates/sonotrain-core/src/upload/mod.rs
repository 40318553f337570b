//! Training-image upload engine.
//!
//! This module handles the donation workflow end to end:
//! 1. Validate selected files plus a label into a [`TrainSubmission`]
//! 2. Start one multipart POST per file, all at once ([`upload_all`])
//! 3. Yield completion events in the order responses arrive
//! 4. Fold events into a [`BatchTracker`] for per-file status rendering

mod batch;
mod client;
mod file;
mod submission;

pub use batch::{upload_all, BatchTracker, TrackedUpload, UploadEvent, UploadStatus};
pub use client::UploadClient;
pub use file::ImageFile;
pub use submission::TrainSubmission;
