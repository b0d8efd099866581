use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] required: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: "{r#type}",
            name: "{name}",
            placeholder: "{placeholder}",
            required,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
