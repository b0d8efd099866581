//! Submit-time checks for the registration form.

use api::{validate_email, RegisterRequest};
use thiserror::Error;

use super::form::FormState;

pub const MIN_PASSWORD_LEN: usize = 6;

/// The first rule a submission broke. `Display` is the toast text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Run the checks in order and stop at the first failure.
///
/// Values are taken as typed; whitespace is not trimmed. Password length is
/// measured in UTF-16 code units, the unit browsers report for input values.
/// The confirmation field is only compared, never required on its own, so an
/// empty confirmation surfaces as a mismatch.
pub fn validate(form: &FormState) -> Result<RegisterRequest, ValidationError> {
    if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !validate_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(RegisterRequest {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    })
}
