//! Concurrent batch runner and per-file status tracking.
//!
//! Every upload of a submission is started at once; completion events arrive
//! in whatever order the network answers. [`BatchTracker`] folds those events
//! into state the results page can render directly: a status per input file
//! plus the arrival order of settled uploads.

use super::{ImageFile, TrainSubmission, UploadClient};
use crate::error::UploadError;
use futures_util::stream::FuturesUnordered;
use futures_util::Stream;
use serde_json::Value;
use tracing::{info, warn};

/// Completion of one per-file upload.
#[derive(Debug, Clone)]
pub struct UploadEvent {
    /// Index of the file within the submission.
    pub file_index: usize,
    /// Parsed JSON response, or why the upload failed.
    pub outcome: Result<Value, UploadError>,
}

/// Per-file task state.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadStatus {
    /// Request is in flight (or not yet issued)
    Pending,
    /// Server accepted the image; response kept opaque
    Succeeded(Value),
    /// Request failed; the file never joins the thumbnail grid
    Failed(String),
}

impl UploadStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, UploadStatus::Pending)
    }
}

/// Start every upload in `submission` without waiting on any other.
///
/// The returned stream yields one [`UploadEvent`] per file in completion
/// order, not submission order. Dropping the stream cancels all requests
/// still in flight, which is how the results page tears down a batch when
/// the user navigates away.
pub fn upload_all(
    client: UploadClient,
    submission: TrainSubmission,
) -> impl Stream<Item = UploadEvent> + Unpin {
    let label = submission.label().to_string();
    submission
        .files()
        .iter()
        .cloned()
        .enumerate()
        .map(|(file_index, file)| {
            let client = client.clone();
            let label = label.clone();
            async move {
                let outcome = client.upload_image(&file, &label).await;
                UploadEvent {
                    file_index,
                    outcome,
                }
            }
        })
        .collect::<FuturesUnordered<_>>()
}

/// One input file and where its upload stands.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedUpload {
    pub file: ImageFile,
    pub status: UploadStatus,
}

/// Accumulates per-file upload state for one submission.
///
/// Entries are keyed by file index and append-only: recording an event never
/// reorders or removes earlier results. The succeeded entries, iterated in
/// [`BatchTracker::results`] order, are exactly the thumbnails to render.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchTracker {
    label: String,
    entries: Vec<TrackedUpload>,
    /// File indices in the order their events arrived.
    completion_order: Vec<usize>,
    started: bool,
}

impl BatchTracker {
    /// One pending entry per input file.
    pub fn new(submission: &TrainSubmission) -> Self {
        Self {
            label: submission.label().to_string(),
            entries: submission
                .files()
                .iter()
                .map(|file| TrackedUpload {
                    file: file.clone(),
                    status: UploadStatus::Pending,
                })
                .collect(),
            completion_order: Vec::new(),
            started: false,
        }
    }

    /// Mark the batch as started. Returns `false` if it already was, so a
    /// caller re-running its setup path cannot trigger a second round of
    /// uploads for the same submission.
    pub fn begin(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Record one completion event.
    ///
    /// Events for unknown or already-settled indices are dropped: the tracker
    /// never holds more results than input files, one per distinct file.
    pub fn record(&mut self, event: UploadEvent) {
        let Some(entry) = self.entries.get_mut(event.file_index) else {
            warn!("⚠️ Dropping event for unknown file index {}", event.file_index);
            return;
        };
        if entry.status.is_settled() {
            warn!("⚠️ Duplicate event for '{}' ignored", entry.file.name);
            return;
        }
        entry.status = match event.outcome {
            Ok(response) => {
                info!("✅ Uploaded '{}'", entry.file.name);
                UploadStatus::Succeeded(response)
            }
            Err(e) => {
                warn!("❌ Upload of '{}' failed: {}", entry.file.name, e);
                UploadStatus::Failed(e.to_string())
            }
        };
        self.completion_order.push(event.file_index);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All input files with their current status, in submission order.
    pub fn entries(&self) -> &[TrackedUpload] {
        &self.entries
    }

    /// Succeeded uploads in the order their responses arrived.
    pub fn results(&self) -> impl Iterator<Item = &TrackedUpload> {
        self.completion_order.iter().filter_map(|&idx| {
            self.entries
                .get(idx)
                .filter(|entry| matches!(entry.status, UploadStatus::Succeeded(_)))
        })
    }

    /// File indices in event-arrival order.
    pub fn completion_order(&self) -> &[usize] {
        &self.completion_order
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn settled_count(&self) -> usize {
        self.completion_order.len()
    }

    pub fn succeeded_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, UploadStatus::Succeeded(_)))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, UploadStatus::Failed(_)))
            .count()
    }

    pub fn all_settled(&self) -> bool {
        self.settled_count() == self.total()
    }
}
