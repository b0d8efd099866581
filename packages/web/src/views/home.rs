use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { "Inventory" }
            p { "Track stock, prices and suppliers in one place." }
            nav {
                class: "home-links",
                Link { to: Route::Register {}, "Register" }
                Link { to: Route::Login {}, "Login" }
            }
        }
    }
}
