//! UI components for the Sonotrain application.
//!
//! # Component Architecture
//!
//! - `app_shell`: AppBar and Footer, the chrome around the active view
//! - `train`: CollectView (pick files + label) and ResultView (upload batch
//!   with thumbnails and per-file status)
//!
//! # Context Providers
//!
//! The root [`App`] provides the shared [`UploadClient`] via Dioxus context;
//! components reach it through [`use_upload_client`].

mod app_shell;
mod train;

pub use app_shell::{AppBar, Footer};
pub use train::{CollectView, FileRow, ResultView};

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use sonotrain_core::upload::{TrainSubmission, UploadClient};

/// Where the user is in the donation flow.
#[derive(Clone, PartialEq)]
enum Stage {
    /// Picking files and a label
    Collect,
    /// Uploading and reviewing one submission
    Results {
        /// Minted per submission; keys the results view so each submission
        /// gets a fresh component instance and therefore exactly one batch
        /// run, while re-renders with the same submission never re-trigger.
        batch_id: usize,
        submission: TrainSubmission,
    },
}

/// API base the upload client is resolved against.
///
/// On web this is the page origin (the backend serves the UI); on native
/// targets it can be overridden at build time via `SONOTRAIN_API_BASE`.
fn api_base() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
        "http://localhost:8000".to_string()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        option_env!("SONOTRAIN_API_BASE")
            .unwrap_or("http://localhost:8000")
            .to_string()
    }
}

/// Access the shared upload client from any component.
///
/// `None` means client construction failed at startup (malformed API base);
/// views render a configuration error instead of silently doing nothing.
pub fn use_upload_client() -> Option<UploadClient> {
    use_context::<Option<UploadClient>>()
}

/// Root component: app shell around the active view.
#[component]
pub fn App() -> Element {
    let mut stage = use_signal(|| Stage::Collect);
    let mut next_batch_id = use_signal(|| 0usize);

    // Client construction can only fail on a malformed base URL, so resolve
    // it once here instead of on every upload.
    use_context_provider(|| match UploadClient::new(&api_base()) {
        Ok(client) => {
            info!("🔌 Train endpoint: {}", client.train_url());
            Some(client)
        }
        Err(e) => {
            error!("❌ Failed to configure upload client: {}", e);
            None
        }
    });

    let handle_submit = move |submission: TrainSubmission| {
        let batch_id = next_batch_id();
        next_batch_id.set(batch_id + 1);
        info!(
            "🚀 Starting batch #{} ({} image(s))",
            batch_id,
            submission.file_count()
        );
        stage.set(Stage::Results {
            batch_id,
            submission,
        });
    };

    let handle_restart = move |_| stage.set(Stage::Collect);

    // Resolve the active view before rsx so each arm stays a plain rsx block
    let active_view = match stage() {
        Stage::Collect => rsx! {
            CollectView { on_submit: handle_submit }
        },
        Stage::Results {
            batch_id,
            submission,
        } => rsx! {
            ResultView {
                key: "{batch_id}",
                submission,
                on_restart: handle_restart,
            }
        },
    };

    rsx! {
        AppBar {}

        main { class: "st-main", {active_view} }

        Footer {}
    }
}
