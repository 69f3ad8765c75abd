//! Sign-up form model

use super::field::{Field, FieldName};
use super::payload::RegistrationPayload;
use super::validation::{
    validate_confirmation, validate_email, validate_password, validate_username,
    SignupValidationError,
};

/// Current values of the four sign-up fields plus their derived validity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormModel {
    username: Field,
    email: Field,
    password: Field,
    password_repeat: Field,
    valid: bool,
}

impl Default for FormModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FormModel {
    /// Create an empty form. An empty form is invalid.
    pub fn new() -> Self {
        let mut form = Self {
            username: Field::new(FieldName::Username),
            email: Field::new(FieldName::Email),
            password: Field::new(FieldName::Password),
            password_repeat: Field::new(FieldName::PasswordRepeat),
            valid: false,
        };
        form.recompute();
        form
    }

    /// Replace a field's value and recompute validity
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set(value);
        self.recompute();
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn field(&self, name: FieldName) -> &Field {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PasswordRepeat => &self.password_repeat,
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).value()
    }

    /// Every failing rule, in form order. Empty iff the form is valid.
    pub fn validation_errors(&self) -> Vec<(FieldName, SignupValidationError)> {
        let checks = [
            (FieldName::Username, validate_username(self.username.value())),
            (FieldName::Email, validate_email(self.email.value())),
            (FieldName::Password, validate_password(self.password.value())),
            (
                FieldName::PasswordRepeat,
                validate_confirmation(self.password.value(), self.password_repeat.value()),
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(name, result)| result.err().map(|e| (name, e)))
            .collect()
    }

    /// Build the registration body from the current values.
    ///
    /// Does not validate; check [`FormModel::is_valid`] first.
    pub fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload::new(
            self.username.value(),
            self.email.value(),
            self.password.value(),
        )
    }

    fn field_mut(&mut self, name: FieldName) -> &mut Field {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PasswordRepeat => &mut self.password_repeat,
        }
    }

    fn recompute(&mut self) {
        self.valid = validate_username(self.username.value()).is_ok()
            && validate_email(self.email.value()).is_ok()
            && validate_password(self.password.value()).is_ok()
            && validate_confirmation(self.password.value(), self.password_repeat.value()).is_ok();
    }
}
