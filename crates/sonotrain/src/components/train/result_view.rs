use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use futures_util::StreamExt;
use sonotrain_core::upload::{upload_all, BatchTracker, TrackedUpload, TrainSubmission};

use super::file_row::FileRow;
use crate::components::use_upload_client;

/// Results page for one submission: uploads every image and fills in
/// thumbnails as responses arrive.
///
/// The caller keys this component by batch id, so a given submission gets
/// exactly one instance and therefore one batch run. The upload task belongs
/// to this component's scope: leaving the page drops the task along with the
/// event stream, which cancels any requests still in flight.
#[component]
pub fn ResultView(submission: TrainSubmission, on_restart: EventHandler<()>) -> Element {
    let client = use_upload_client();
    let mut tracker = use_signal(|| BatchTracker::new(&submission));

    // Start the batch once per component instance. `begin` additionally
    // guards against a second run for the same tracker.
    use_hook(|| {
        let Some(client) = client.clone() else {
            error!("❌ No upload client configured; nothing will be uploaded");
            return;
        };
        let submission = submission.clone();
        spawn(async move {
            if !tracker.write().begin() {
                return;
            }
            info!(
                "⬆️ Uploading {} image(s) labelled '{}'",
                submission.file_count(),
                submission.label()
            );
            let mut events = upload_all(client, submission);
            while let Some(event) = events.next().await {
                // Append-only fold: each event settles exactly one file
                tracker.write().record(event);
            }
        });
    });

    // Snapshot for rendering: succeeded uploads in completion order plus
    // every file with its current status.
    let thumbs: Vec<(usize, String, String)> = tracker
        .read()
        .results()
        .enumerate()
        .map(|(order, entry)| (order, entry.file.preview_data_url(), entry.file.name.clone()))
        .collect();
    let entries: Vec<TrackedUpload> = tracker.read().entries().to_vec();

    rsx! {
        section { class: "st-results",
            div { class: "st-results-intro",
                h2 { class: "st-view-title", "Thanks for training the AI" }
                p { class: "st-view-subtitle",
                    "We really appreciate your donation. Your images will be checked by "
                    "our data scientists and medical doctors before they join the dataset."
                }
            }

            if client.is_none() {
                div { class: "st-form-error",
                    "Upload service is not configured; these images were not sent."
                }
            }

            // Thumbnails appear in the order responses arrive
            aside { class: "st-thumbs",
                for (order, preview_url, name) in thumbs.iter() {
                    div { key: "{order}", class: "st-thumb",
                        img {
                            class: "st-thumb-img",
                            src: "{preview_url}",
                            alt: "Preview of {name}",
                        }
                    }
                }
            }

            div { class: "st-file-list",
                for (idx, entry) in entries.iter().enumerate() {
                    FileRow {
                        key: "{idx}",
                        file_name: entry.file.name.clone(),
                        status: entry.status.clone(),
                    }
                }
            }

            button {
                class: "st-button st-button--primary",
                onclick: move |_| on_restart.call(()),
                "Train the AI again"
            }
        }
    }
}
