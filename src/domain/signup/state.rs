//! Submission lifecycle state

use std::fmt;

use serde::Serialize;

/// Where a registration attempt currently is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum SubmissionState {
    /// Waiting for the user to submit
    #[default]
    Idle,

    /// A registration call is in flight
    Submitting,

    /// The account was created
    Succeeded,

    /// The registration call failed with a reason
    Failed(String),
}

impl SubmissionState {
    /// Check if this state is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// Check if this state can transition to another state
    pub fn can_transition_to(&self, target: &SubmissionState) -> bool {
        match (self, target) {
            (Self::Idle, Self::Submitting) => true,

            (Self::Submitting, Self::Succeeded) => true,
            (Self::Submitting, Self::Failed(_)) => true,

            // Retry or dismissal
            (Self::Failed(_), Self::Submitting) => true,
            (Self::Failed(_), Self::Idle) => true,

            (Self::Succeeded, _) => false,

            _ => false,
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    }

    #[test]
    fn test_valid_transitions() {
        let failed = SubmissionState::Failed("boom".to_string());

        assert!(SubmissionState::Idle.can_transition_to(&SubmissionState::Submitting));
        assert!(SubmissionState::Submitting.can_transition_to(&SubmissionState::Succeeded));
        assert!(SubmissionState::Submitting.can_transition_to(&failed));
        assert!(failed.can_transition_to(&SubmissionState::Submitting));
        assert!(failed.can_transition_to(&SubmissionState::Idle));
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!SubmissionState::Idle.can_transition_to(&SubmissionState::Succeeded));
        assert!(!SubmissionState::Submitting.can_transition_to(&SubmissionState::Submitting));
        assert!(!SubmissionState::Submitting.can_transition_to(&SubmissionState::Idle));
        assert!(!SubmissionState::Succeeded.can_transition_to(&SubmissionState::Idle));
        assert!(!SubmissionState::Succeeded.can_transition_to(&SubmissionState::Submitting));
    }

    #[test]
    fn test_failure_reason_and_display() {
        let failed = SubmissionState::Failed("Network error: refused".to_string());
        assert_eq!(failed.failure_reason(), Some("Network error: refused"));
        assert_eq!(failed.to_string(), "failed: Network error: refused");
        assert_eq!(SubmissionState::Submitting.failure_reason(), None);
        assert!(SubmissionState::Succeeded.is_terminal());
        assert!(!failed.is_terminal());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(SubmissionState::Failed("x".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "failed", "reason": "x"}));

        let json = serde_json::to_value(SubmissionState::Submitting).unwrap();
        assert_eq!(json, serde_json::json!({"status": "submitting"}));
    }
}
