//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const AUTH_CSS: Asset = asset!("/assets/auth.css");
pub const TOAST_CSS: Asset = asset!("/assets/toast.css");

mod api_client;
pub use api_client::{use_api_client, ApiProvider};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, AuthStore};

pub mod toast;
pub use toast::{use_toasts, Notifier, ToastProvider, Toasts};

pub mod register;
pub use register::{
    Navigate, RegistrationFlow, RegistrationForm, RegistrationService, SubmitIndicator,
    SubmitOutcome,
};
