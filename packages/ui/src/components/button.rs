use dioxus::prelude::*;

/// Primary action button.
#[component]
pub fn Button(
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "--btn --btn-primary {class}",
            r#type: "{r#type}",
            {children}
        }
    }
}
