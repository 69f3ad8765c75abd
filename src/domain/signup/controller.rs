//! Submission controller - owns the form and drives the registration lifecycle

use std::sync::Arc;

use futures::FutureExt;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use super::field::FieldName;
use super::form::FormModel;
use super::service::RegistrationService;
use super::state::SubmissionState;
use crate::domain::DomainError;

/// Message shown once the account has been created
pub const ACTIVATION_MESSAGE: &str = "Please check your email to activate your account";

type RegistrationTask = JoinHandle<Result<(), DomainError>>;

/// Policy knobs for the submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Return to `Idle` as soon as a registration fails, keeping the reason
    /// visible. When off, the controller stays in `Failed` until the failure is
    /// dismissed.
    pub rearm_on_failure: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            rearm_on_failure: true,
        }
    }
}

/// What a call to [`SubmissionController::submit`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A registration call was issued
    Started,
    /// A call is already in flight; nothing was issued
    AlreadySubmitting,
    /// The form does not validate
    InvalidForm,
    /// The account was already created
    AlreadyRegistered,
    /// The last attempt failed and has not been dismissed
    AwaitingDismissal,
    /// No Tokio runtime is available to run the call; nothing was issued
    NoRuntime,
}

/// Snapshot of everything the form UI renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub submit_enabled: bool,
    pub spinner_visible: bool,
    pub form_visible: bool,
    pub activation_message_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Drives one sign-up form through Idle -> Submitting -> Succeeded | Failed.
///
/// At most one registration call is in flight at any time, however often
/// [`submit`](Self::submit) is triggered. The call runs as a task on the
/// current Tokio runtime; its result is applied by [`settle`](Self::settle) or
/// [`try_settle`](Self::try_settle).
pub struct SubmissionController {
    form: FormModel,
    state: SubmissionState,
    /// Reason of the last failed attempt once re-armed to `Idle`
    last_failure: Option<String>,
    policy: SubmissionPolicy,
    service: Arc<dyn RegistrationService>,
    in_flight: Option<RegistrationTask>,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn RegistrationService>) -> Self {
        Self::with_policy(service, SubmissionPolicy::default())
    }

    pub fn with_policy(service: Arc<dyn RegistrationService>, policy: SubmissionPolicy) -> Self {
        Self {
            form: FormModel::new(),
            state: SubmissionState::Idle,
            last_failure: None,
            policy,
            service,
            in_flight: None,
        }
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn policy(&self) -> SubmissionPolicy {
        self.policy
    }

    /// Apply a user edit to the form
    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.form.set_field(name, value);
        debug!(field = %name, valid = self.form.is_valid(), "Form field updated");
    }

    /// Handle a submit trigger.
    ///
    /// Issues exactly one registration call when the lifecycle accepts a submit
    /// and the form is valid; every other case is a no-op reported through the
    /// returned outcome.
    pub fn submit(&mut self) -> SubmitOutcome {
        match &self.state {
            SubmissionState::Submitting => {
                debug!("Submit ignored: registration already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            SubmissionState::Succeeded => {
                debug!("Submit ignored: account already registered");
                return SubmitOutcome::AlreadyRegistered;
            }
            SubmissionState::Failed(_) => {
                debug!("Submit ignored: previous failure not dismissed");
                return SubmitOutcome::AwaitingDismissal;
            }
            SubmissionState::Idle => {}
        }

        if !self.form.is_valid() {
            debug!("Submit ignored: form is invalid");
            return SubmitOutcome::InvalidForm;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("Submit ignored: no Tokio runtime to run the registration call");
            return SubmitOutcome::NoRuntime;
        };

        let payload = self.form.to_payload();
        let service = Arc::clone(&self.service);

        info!(username = %payload.username, "Submitting registration");
        self.last_failure = None;
        self.transition(SubmissionState::Submitting);
        self.in_flight = Some(runtime.spawn(async move { service.register(&payload).await }));

        SubmitOutcome::Started
    }

    /// Wait for the in-flight call, if any, and apply its outcome.
    ///
    /// Cancel-safe: if this future is dropped before the call finishes, the call
    /// stays in flight and a later `settle` or `try_settle` picks it up.
    pub async fn settle(&mut self) -> &SubmissionState {
        if let Some(task) = self.in_flight.as_mut() {
            let joined = task.await;
            self.in_flight = None;
            self.resolve(joined);
        }

        &self.state
    }

    /// Apply the in-flight call's outcome if it has already finished.
    ///
    /// Returns `true` when nothing is left in flight.
    pub fn try_settle(&mut self) -> bool {
        let Some(task) = self.in_flight.as_mut() else {
            return true;
        };

        match task.now_or_never() {
            Some(joined) => {
                self.in_flight = None;
                self.resolve(joined);
                true
            }
            None => false,
        }
    }

    /// Clear the last failure, moving from `Failed` back to `Idle` if needed.
    ///
    /// Returns `false` when there was no failure to dismiss.
    pub fn dismiss_failure(&mut self) -> bool {
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.transition(SubmissionState::Idle);
            return true;
        }

        self.last_failure.take().is_some()
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.accepts_submit() && self.form.is_valid()
    }

    pub fn is_spinner_visible(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn is_form_visible(&self) -> bool {
        self.state != SubmissionState::Succeeded
    }

    pub fn is_activation_message_visible(&self) -> bool {
        self.state == SubmissionState::Succeeded
    }

    /// Reason of the last failed attempt, until it is dismissed or a new one starts
    pub fn failure_reason(&self) -> Option<&str> {
        self.state
            .failure_reason()
            .or(self.last_failure.as_deref())
    }

    pub fn view(&self) -> FormView {
        FormView {
            submit_enabled: self.is_submit_enabled(),
            spinner_visible: self.is_spinner_visible(),
            form_visible: self.is_form_visible(),
            activation_message_visible: self.is_activation_message_visible(),
            failure_reason: self.failure_reason().map(str::to_string),
        }
    }

    fn accepts_submit(&self) -> bool {
        self.state == SubmissionState::Idle
    }

    fn resolve(&mut self, joined: Result<Result<(), DomainError>, JoinError>) {
        let outcome = joined.unwrap_or_else(|e| {
            Err(DomainError::internal(format!(
                "Registration task failed: {}",
                e
            )))
        });

        match outcome {
            Ok(()) => {
                info!("Registration succeeded");
                self.transition(SubmissionState::Succeeded);
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                let reason = e.to_string();
                self.transition(SubmissionState::Failed(reason.clone()));

                if self.policy.rearm_on_failure {
                    self.transition(SubmissionState::Idle);
                    self.last_failure = Some(reason);
                }
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug_assert!(
            self.state.can_transition_to(&next),
            "invalid submission transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "Submission state changed");
        self.state = next;
    }
}
