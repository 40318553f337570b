//! Sonotrain core - upload engine for ultrasound training-image donations.
//!
//! This crate contains everything the Sonotrain UI needs that does not touch
//! a renderer: the validated submission model, the multipart upload client,
//! and the concurrent batch runner with per-file status tracking.
//!
//! # Workflow
//!
//! 1. Selected files and a label become a [`upload::TrainSubmission`] through
//!    a validating constructor.
//! 2. [`upload::upload_all`] starts one `POST /api/train` per file, all at
//!    once, and yields completion events in network-arrival order.
//! 3. A [`upload::BatchTracker`] folds those events into per-file state
//!    (pending / succeeded / failed) ready for rendering.
//!
//! The crate is platform-agnostic: on native targets reqwest runs over hyper
//! with rustls, on wasm it runs over the browser's fetch API.

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod upload;
