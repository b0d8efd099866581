use dioxus::prelude::*;

use super::flow::RegistrationFlow;
use super::form::{FormField, FormState};
use crate::api_client::use_api_client;
use crate::auth::use_auth;
use crate::components::{Button, Card, Input, Loader};
use crate::icons::FaUserPlus;
use crate::toast::use_toasts;
use crate::Icon;

/// Sign-up card: name, email, password and confirmation.
///
/// Needs [`crate::ApiProvider`], [`crate::AuthProvider`], [`crate::ToastProvider`]
/// and a router above it.
#[component]
pub fn RegistrationForm() -> Element {
    let auth = use_auth();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let client = use_api_client();
    let mut form = use_signal(FormState::default);
    let is_submitting = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let mut flow = RegistrationFlow {
                service: client,
                auth,
                navigator,
                notifier: toasts,
                indicator: is_submitting,
            };
            flow.submit(&form()).await;
        });
    };

    rsx! {
        document::Stylesheet { href: crate::AUTH_CSS }

        div {
            class: "container auth",

            if is_submitting() {
                Loader {}
            }

            Card {
                div {
                    class: "auth-form",

                    div {
                        class: "--flex-center",
                        Icon { icon: FaUserPlus, width: 35, height: 35, fill: "#999" }
                    }
                    h2 { "Register" }

                    form {
                        onsubmit: handle_register,

                        for field in FormField::ALL {
                            Input {
                                key: "{field:?}",
                                r#type: field.input_type().to_string(),
                                name: field.input_name().to_string(),
                                placeholder: field.placeholder().to_string(),
                                required: true,
                                value: form.read().get(field).to_string(),
                                oninput: move |evt: FormEvent| form.write().update(field, evt.value()),
                            }
                        }

                        Button {
                            r#type: "submit",
                            class: "--btn-block",
                            "Register"
                        }
                    }

                    span {
                        class: "auth-links",
                        Link { to: "/", "Home" }
                        p { "Already have an account?" }
                        Link { to: "/login", "Login" }
                    }
                }
            }
        }
    }
}
