//! In-memory state of the registration form.

/// One of the four registration inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Render order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];

    /// The input's `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Password => "password",
            FormField::ConfirmPassword => "password2",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Name => "text",
            FormField::Email => "email",
            FormField::Password | FormField::ConfirmPassword => "password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Password => "Password",
            FormField::ConfirmPassword => "Confirm Password",
        }
    }
}

/// Values typed so far. Everything starts empty and nothing is checked until submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder form of [`FormState::update`].
    pub fn with(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.update(field, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_starts_empty() {
        let state = FormState::default();
        for field in FormField::ALL {
            assert_eq!(state.get(field), "");
        }
    }

    #[test]
    fn test_update_touches_only_one_field() {
        for field in FormField::ALL {
            let before = filled();
            let mut after = before.clone();
            after.update(field, "changed");

            for other in FormField::ALL {
                if other == field {
                    assert_eq!(after.get(other), "changed");
                } else {
                    assert_eq!(after.get(other), before.get(other), "{other:?} changed");
                }
            }
        }
    }

    #[test]
    fn test_email_update_leaves_rest_alone() {
        let mut state = filled();
        state.update(FormField::Email, "j");
        assert_eq!(state.email, "j");
        assert_eq!(state.name, "Jo");
        assert_eq!(state.password, "secret1");
        assert_eq!(state.confirm_password, "secret1");
    }

    #[test]
    fn test_input_names_match_rendered_attributes() {
        let names: Vec<_> = FormField::ALL.iter().map(|f| f.input_name()).collect();
        assert_eq!(names, ["name", "email", "password", "password2"]);
    }
}
