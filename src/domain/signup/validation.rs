//! Field validation rules for the sign-up form

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Permissive `local@domain` shape, no whitespace anywhere
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is a valid regex"));

/// Errors that can occur during sign-up field validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("E-mail must look like name@domain")]
    InvalidEmail,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Password mismatch")]
    PasswordMismatch,
}

/// Validate a username
///
/// Valid iff non-empty after trimming surrounding whitespace.
pub fn validate_username(value: &str) -> Result<(), SignupValidationError> {
    if value.trim().is_empty() {
        return Err(SignupValidationError::EmptyUsername);
    }

    Ok(())
}

/// Validate an e-mail address against a basic `local@domain` shape
///
/// No RFC 5322 compliance is attempted.
pub fn validate_email(value: &str) -> Result<(), SignupValidationError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(SignupValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validate a password. Any non-empty value passes.
pub fn validate_password(value: &str) -> Result<(), SignupValidationError> {
    if value.is_empty() {
        return Err(SignupValidationError::EmptyPassword);
    }

    Ok(())
}

/// Validate that the repeated password is exactly the password
pub fn validate_confirmation(password: &str, repeat: &str) -> Result<(), SignupValidationError> {
    if password != repeat {
        return Err(SignupValidationError::PasswordMismatch);
    }

    Ok(())
}
