use dioxus::prelude::*;

/// Global app bar with product name and tagline.
#[component]
pub fn AppBar() -> Element {
    rsx! {
        header { class: "st-appbar",
            div { class: "st-appbar-brand",
                span { class: "st-appbar-logo", "🩺" }
                h1 { class: "st-appbar-title", "Sonotrain" }
            }
            span { class: "st-appbar-tagline",
                "Donate ultrasound images to improve screening"
            }
        }
    }
}
