//! Sonotrain - donate ultrasound images to a screening model.
//!
//! A small cross-platform app for collecting labelled training images:
//! pick image files, attach a label, and every file is uploaded to the
//! training backend as its own multipart POST while thumbnails fill in as
//! responses arrive.
//!
//! # Architecture
//!
//! - **UI** (this crate): Dioxus components for the collect and results views
//! - **Engine** (`sonotrain-core`): validated submissions, the multipart
//!   client, and the concurrent batch runner with per-file tracking
//!
//! # Platform Support
//!
//! - **Web (WASM)**: uploads via the browser's fetch API
//! - **Desktop**: macOS/Windows/Linux via the system webview

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
