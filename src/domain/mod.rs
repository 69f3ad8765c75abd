//! Domain layer - Sign-up form rules and submission lifecycle

pub mod error;
pub mod signup;

pub use error::DomainError;
pub use signup::{
    FieldName, FormModel, FormView, RegistrationPayload, RegistrationService,
    SignupValidationError, SubmissionController, SubmissionPolicy, SubmissionState,
    SubmitOutcome,
};
