//! Landing view after a successful registration.

use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let state = auth();

    if !state.logged_in {
        return rsx! {
            div {
                class: "dashboard",
                p { "You are not signed in." }
                Link { to: Route::Login {}, "Login" }
            }
        };
    }

    rsx! {
        div {
            class: "dashboard",
            h2 { "Welcome, {state.name}" }
        }
    }
}
