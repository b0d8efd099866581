//! The registration view and the logic behind it.
//!
//! - [`form`]: the four input values and the keyed field update
//! - [`validation`]: ordered submit-time checks
//! - [`flow`]: the submit sequence and its collaborator traits
//! - `component`: the Dioxus view wiring signals into the flow

mod component;
pub mod flow;
pub mod form;
pub mod validation;

pub use component::RegistrationForm;
pub use flow::{
    Navigate, RegistrationFlow, RegistrationService, SubmitIndicator, SubmitOutcome,
    DASHBOARD_PATH,
};
pub use form::{FormField, FormState};
pub use validation::{validate, ValidationError, MIN_PASSWORD_LEN};
