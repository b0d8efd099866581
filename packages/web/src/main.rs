use dioxus::prelude::*;
use tracing::Level;

use ui::{ApiProvider, AuthProvider, ToastProvider};
use views::{Dashboard, Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialise logger: {e}");
    }

    tracing::debug!("Launching web client");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            AuthProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}
