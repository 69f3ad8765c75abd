//! Sign-up domain
//!
//! Field validation, the form model, and the controller that guards the
//! registration submission lifecycle.

mod controller;
mod field;
mod form;
mod payload;
mod service;
mod state;
mod validation;

pub use controller::{
    FormView, SubmissionController, SubmissionPolicy, SubmitOutcome, ACTIVATION_MESSAGE,
};
pub use field::{Field, FieldName, UnknownFieldError};
pub use form::FormModel;
pub use payload::RegistrationPayload;
pub use service::RegistrationService;
pub use state::SubmissionState;
pub use validation::{
    validate_confirmation, validate_email, validate_password, validate_username,
    SignupValidationError,
};

#[cfg(test)]
pub use service::MockRegistrationService;
