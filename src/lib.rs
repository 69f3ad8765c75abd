//! Sign-up form
//!
//! The validation and submission core of a user-registration form:
//! - Field validators and a form model with always-fresh validity
//! - A submission controller that allows at most one registration call in flight
//! - An HTTP registration transport and an in-memory stand-in

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    DomainError, FieldName, FormModel, FormView, RegistrationPayload, RegistrationService,
    SubmissionController, SubmissionPolicy, SubmissionState, SubmitOutcome,
};
