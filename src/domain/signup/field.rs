//! Form field types

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A string that names none of the form's fields
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown form field: '{0}'")]
pub struct UnknownFieldError(pub String);

/// Name of a sign-up form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Username,
    Email,
    Password,
    PasswordRepeat,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::PasswordRepeat,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordRepeat => "passwordRepeat",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "E-mail",
            Self::Password => "Password",
            Self::PasswordRepeat => "Password Repeat",
        }
    }
}

impl FromStr for FieldName {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "passwordRepeat" | "password_repeat" => Ok(Self::PasswordRepeat),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single named input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: FieldName,
    value: String,
}

impl Field {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn name(&self) -> FieldName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name_parsing() {
        for name in FieldName::ALL {
            assert_eq!(name.as_str().parse::<FieldName>(), Ok(name));
        }
        assert_eq!(
            "password_repeat".parse::<FieldName>(),
            Ok(FieldName::PasswordRepeat)
        );
        assert_eq!(
            "age".parse::<FieldName>(),
            Err(UnknownFieldError("age".to_string()))
        );
    }

    #[test]
    fn test_unknown_field_message() {
        let error = "age".parse::<FieldName>().unwrap_err();
        assert_eq!(error.to_string(), "Unknown form field: 'age'");
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = Field::new(FieldName::Email);
        assert_eq!(field.name(), FieldName::Email);
        assert_eq!(field.value(), "");
    }
}
