//! End-to-end tests for the upload engine against an in-process `/api/train`
//! server.
//!
//! The server parses the same multipart contract the real backend exposes
//! (an `image` part plus a `label` field) and scripts its behavior off the
//! uploaded file name: `fail*` is rejected with HTTP 500, `slow*` is delayed
//! before answering. That lets the tests pin down completion-order and
//! failure-path behavior without real network flakiness.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use futures_util::StreamExt;
use serde_json::json;
use sonotrain_core::upload::{
    upload_all, BatchTracker, ImageFile, TrainSubmission, UploadClient, UploadStatus,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

// ============================================================================
// Test server
// ============================================================================

/// One request as observed by the server.
#[derive(Debug, Clone)]
struct ReceivedUpload {
    file_name: String,
    label: String,
    byte_len: usize,
}

#[derive(Clone, Default)]
struct ServerState {
    received: Arc<Mutex<Vec<ReceivedUpload>>>,
}

async fn train_handler(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<serde_json::Value>) {
    let mut file_name = String::new();
    let mut label = String::new();
    let mut byte_len = 0usize;

    while let Some(field) = multipart.next_field().await.expect("valid multipart") {
        match field.name().unwrap_or("") {
            "image" => {
                file_name = field.file_name().unwrap_or("").to_string();
                byte_len = field.bytes().await.expect("image bytes").len();
            }
            "label" => label = field.text().await.expect("label text"),
            _ => {}
        }
    }

    state.received.lock().unwrap().push(ReceivedUpload {
        file_name: file_name.clone(),
        label,
        byte_len,
    });

    if file_name.starts_with("fail") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "rejected"})),
        );
    }
    if file_name.starts_with("slow") {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    (StatusCode::OK, Json(json!({"status": "queued", "image": file_name})))
}

/// Bind an ephemeral port and serve `/api/train` in the background.
async fn spawn_server() -> (String, ServerState) {
    let state = ServerState::default();
    let app = Router::new()
        .route("/api/train", post(train_handler))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server");
    });

    (format!("http://{}", addr), state)
}

fn sample_file(name: &str) -> ImageFile {
    ImageFile::new(name, vec![0u8; 64])
}

/// Run a whole batch to completion, folding every event into a tracker.
async fn run_batch(base: &str, submission: TrainSubmission) -> BatchTracker {
    let client = UploadClient::new(base).expect("client");
    let mut tracker = BatchTracker::new(&submission);
    assert!(tracker.begin());

    let mut events = upload_all(client, submission);
    while let Some(event) = events.next().await {
        tracker.record(event);
    }
    tracker
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn all_uploads_settle_with_one_result_per_file() {
    let (base, state) = spawn_server().await;
    let files = vec![
        sample_file("a.png"),
        sample_file("b.jpg"),
        sample_file("c.webp"),
        sample_file("d.png"),
    ];
    let submission = TrainSubmission::new(files, "covid").unwrap();

    let tracker = run_batch(&base, submission).await;

    assert!(tracker.all_settled());
    assert_eq!(tracker.succeeded_count(), 4);
    assert_eq!(tracker.failed_count(), 0);

    // Each result references a distinct input file
    let result_names: HashSet<_> = tracker.results().map(|e| e.file.name.clone()).collect();
    assert_eq!(result_names.len(), 4);

    assert_eq!(state.received.lock().unwrap().len(), 4);
}

#[tokio::test]
async fn every_request_carries_the_shared_label_and_image() {
    let (base, state) = spawn_server().await;
    let files = vec![sample_file("a.png"), sample_file("b.png"), sample_file("c.png")];
    let submission = TrainSubmission::new(files, "pneumonia").unwrap();

    run_batch(&base, submission).await;

    let received = state.received.lock().unwrap();
    assert_eq!(received.len(), 3);
    for upload in received.iter() {
        assert_eq!(upload.label, "pneumonia");
        assert_eq!(upload.byte_len, 64);
        assert!(!upload.file_name.is_empty());
    }
}

#[tokio::test]
async fn results_arrive_in_completion_order_not_submission_order() {
    let (base, _state) = spawn_server().await;
    let files = vec![sample_file("slow.png"), sample_file("quick.png")];
    let submission = TrainSubmission::new(files, "regular").unwrap();

    let tracker = run_batch(&base, submission).await;

    // The delayed first file settles last
    assert_eq!(tracker.completion_order(), &[1, 0]);
    let names: Vec<_> = tracker.results().map(|e| e.file.name.as_str()).collect();
    assert_eq!(names, vec!["quick.png", "slow.png"]);
}

#[tokio::test]
async fn failed_upload_is_tracked_and_kept_out_of_results() {
    let (base, _state) = spawn_server().await;
    let files = vec![sample_file("fail.png"), sample_file("ok.png")];
    let submission = TrainSubmission::new(files, "covid").unwrap();

    let tracker = run_batch(&base, submission).await;

    assert!(tracker.all_settled());
    assert_eq!(tracker.failed_count(), 1);
    assert_eq!(tracker.succeeded_count(), 1);

    let names: Vec<_> = tracker.results().map(|e| e.file.name.as_str()).collect();
    assert_eq!(names, vec!["ok.png"]);

    assert!(matches!(
        tracker.entries()[0].status,
        UploadStatus::Failed(ref reason) if reason.contains("500")
    ));
}

#[tokio::test]
async fn successful_response_body_is_preserved() {
    let (base, _state) = spawn_server().await;
    let submission = TrainSubmission::new(vec![sample_file("a.png")], "covid").unwrap();

    let tracker = run_batch(&base, submission).await;

    let entry = tracker.results().next().expect("one result");
    match &entry.status {
        UploadStatus::Succeeded(body) => {
            assert_eq!(body["status"], "queued");
            assert_eq!(body["image"], "a.png");
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn invalid_submissions_never_reach_the_network() {
    // Constructor rejects bad input before any request exists
    assert!(TrainSubmission::new(vec![], "covid").is_err());
    assert!(TrainSubmission::new(vec![sample_file("a.png")], "  ").is_err());
}
