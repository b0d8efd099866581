use dioxus::prelude::*;

/// Full-screen overlay with a spinner.
#[component]
pub fn Loader(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "loader-overlay",
            role: "status",
            aria_label: "{label}",
            div { class: "loader-spinner" }
        }
    }
}
