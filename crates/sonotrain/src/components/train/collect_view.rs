use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use sonotrain_core::upload::{ImageFile, TrainSubmission};

/// File picker and label entry for one training donation.
///
/// Selected files are read into memory here; the submit handler only ever
/// receives a fully validated [`TrainSubmission`], so the results view cannot
/// be reached with half-formed input.
#[component]
pub fn CollectView(on_submit: EventHandler<TrainSubmission>) -> Element {
    let mut picked = use_signal(Vec::<ImageFile>::new);
    let mut label = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut is_reading = use_signal(|| false);

    let handle_files = move |evt: FormEvent| {
        spawn(async move {
            let files = evt.files();
            if files.is_empty() {
                return;
            }

            is_reading.set(true);
            let mut loaded = Vec::new();

            for file in files {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        loaded.push(ImageFile::new(name, bytes.to_vec()));
                    }
                    Err(e) => {
                        warn!("Failed to read {}: {}", name, e);
                    }
                }
            }

            info!("🖼️ Selected {} image(s)", loaded.len());
            picked.set(loaded);
            is_reading.set(false);
        });
    };

    let handle_start = move |_| match TrainSubmission::new(picked(), label()) {
        Ok(submission) => {
            form_error.set(None);
            on_submit.call(submission);
        }
        Err(e) => {
            form_error.set(Some(e.to_string()));
        }
    };

    rsx! {
        section { class: "st-collect",
            div { class: "st-collect-intro",
                h2 { class: "st-view-title", "Train the AI" }
                p { class: "st-view-subtitle",
                    "Pick ultrasound images and tell us what they show. "
                    "Each image is uploaded separately to the training pipeline."
                }
            }

            input {
                r#type: "file",
                class: "st-file-input",
                multiple: true,
                accept: "image/*",
                onchange: handle_files,
            }

            if !picked().is_empty() {
                div { class: "st-collect-count", "{picked().len()} image(s) ready" }
            }

            input {
                r#type: "text",
                class: "st-label-input",
                placeholder: "Label, e.g. covid / pneumonia / regular",
                value: "{label}",
                oninput: move |evt| label.set(evt.value()),
            }

            if let Some(err) = form_error() {
                div { class: "st-form-error", "{err}" }
            }

            button {
                class: "st-button st-button--primary",
                disabled: is_reading(),
                onclick: handle_start,
                if is_reading() { "Reading images…" } else { "Start training" }
            }
        }
    }
}
