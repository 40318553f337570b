use dioxus::prelude::*;

/// Footer with review-process messaging
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "st-footer",
            span { class: "st-footer-text",
                "Every donated image is reviewed before it joins the dataset."
            }
        }
    }
}
