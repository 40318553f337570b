use dioxus::prelude::*;
use sonotrain::components::App as SonotrainApp;

fn main() {
    // Initialize cross-platform logger (web console + desktop stdout).
    // DEBUG level for development builds, INFO for release builds.
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    // Platform-specific launch configuration
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Sonotrain")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 820.0))
                .with_min_inner_size(LogicalSize::new(700.0, 520.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "mobile")]
    {
        dioxus::LaunchBuilder::mobile().launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[allow(dead_code)] // Unused when built without a renderer feature
#[component]
fn App() -> Element {
    rsx! {
        // One stylesheet, inlined so web and desktop load it the same way
        style { {include_str!("../assets/sonotrain.css")} }

        div { class: "st-body",
            SonotrainApp {}
        }
    }
}
