use dioxus::prelude::*;

/// White, rounded panel.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {class}",
            {children}
        }
    }
}
