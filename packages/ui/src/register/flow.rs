//! # Registration submit flow
//!
//! The logic behind the register button, kept free of rendering so it can run
//! against fakes. A [`RegistrationFlow`] bundles the five collaborators the form
//! talks to:
//!
//! | Field | Trait | Production impl |
//! |-------|-------|-----------------|
//! | `service` | [`RegistrationService`] | [`api::ApiClient`] |
//! | `auth` | [`AuthStore`] | `Signal<AuthState>` from [`crate::AuthProvider`] |
//! | `navigator` | [`Navigate`] | the router's [`Navigator`] |
//! | `notifier` | [`Notifier`] | [`crate::Toasts`] |
//! | `indicator` | [`SubmitIndicator`] | the form's `Signal<bool>` |
//!
//! [`RegistrationFlow::submit`] validates synchronously, then suspends on the
//! network call. There is no guard against a second submit while one is in flight,
//! and no timeout.

use api::{ApiClient, ApiError, RegisterRequest, UserInfo};
use dioxus::prelude::*;
use dioxus::router::Navigator;

use super::form::FormState;
use super::validation::{validate, ValidationError};
use crate::auth::AuthStore;
use crate::toast::Notifier;

/// Where a freshly registered user lands.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Creates accounts on the backend.
#[allow(async_fn_in_trait)]
pub trait RegistrationService {
    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, ApiError>;
}

impl RegistrationService for ApiClient {
    async fn register(&self, request: RegisterRequest) -> Result<UserInfo, ApiError> {
        self.register_user(&request).await
    }
}

/// Moves the app to another view.
pub trait Navigate {
    fn navigate_to(&mut self, path: &str);
}

impl Navigate for Navigator {
    fn navigate_to(&mut self, path: &str) {
        if let Some(failure) = self.push(path.to_string()) {
            tracing::warn!("Navigation to {} failed: {:?}", path, failure);
        }
    }
}

/// Shows or hides the loading indicator.
pub trait SubmitIndicator {
    fn set_submitting(&mut self, submitting: bool);
}

impl SubmitIndicator for Signal<bool> {
    fn set_submitting(&mut self, submitting: bool) {
        // The form may already be unmounted once navigation has happened.
        if let Ok(mut flag) = self.try_write() {
            *flag = submitting;
        }
    }
}

/// What a single submit did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Stopped before any network call.
    Rejected(ValidationError),
    Registered(UserInfo),
    /// The backend call failed; only logged.
    Failed(ApiError),
}

/// The collaborators one submit needs.
pub struct RegistrationFlow<S, A, N, T, B> {
    pub service: S,
    pub auth: A,
    pub navigator: N,
    pub notifier: T,
    pub indicator: B,
}

impl<S, A, N, T, B> RegistrationFlow<S, A, N, T, B>
where
    S: RegistrationService,
    A: AuthStore,
    N: Navigate,
    T: Notifier,
    B: SubmitIndicator,
{
    pub async fn submit(&mut self, form: &FormState) -> SubmitOutcome {
        let request = match validate(form) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Registration rejected: {}", e);
                self.notifier.notify_error(&e.to_string());
                return SubmitOutcome::Rejected(e);
            }
        };

        self.indicator.set_submitting(true);
        tracing::info!("Registering {}", request.email);

        match self.service.register(request).await {
            Ok(user) => {
                self.auth.set_logged_in(true);
                self.auth.set_name(user.name.clone());
                self.navigator.navigate_to(DASHBOARD_PATH);
                self.indicator.set_submitting(false);
                SubmitOutcome::Registered(user)
            }
            Err(e) => {
                self.indicator.set_submitting(false);
                tracing::error!("Registration failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
