//! Login page placeholder; the register card links here.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "login",
            h2 { "Login" }
            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
            Link { to: Route::Home {}, "Home" }
        }
    }
}
