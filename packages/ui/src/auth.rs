//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

/// Client-side view of the current session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub logged_in: bool,
    /// Display name of the signed-in user. Empty when logged out.
    pub name: String,
}

/// The two setters views use to record a login.
///
/// Updates are applied one at a time; there is no way to set both atomically.
pub trait AuthStore {
    fn set_logged_in(&mut self, logged_in: bool);
    fn set_name(&mut self, name: String);
}

impl AuthStore for AuthState {
    fn set_logged_in(&mut self, logged_in: bool) {
        self.logged_in = logged_in;
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl AuthStore for Signal<AuthState> {
    fn set_logged_in(&mut self, logged_in: bool) {
        self.write().set_logged_in(logged_in);
    }

    fn set_name(&mut self, name: String) {
        self.write().set_name(name);
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
