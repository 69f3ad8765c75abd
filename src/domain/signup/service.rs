//! Registration collaborator trait

use async_trait::async_trait;

use super::payload::RegistrationPayload;
use crate::domain::DomainError;

/// Account creation capability consumed by the submission controller.
///
/// `Ok(())` marks success; any `Err` is reported to the user as the failure reason.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), DomainError>;
}
