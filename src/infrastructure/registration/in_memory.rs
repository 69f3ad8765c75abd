//! In-memory registration service
//!
//! Records every call instead of talking to a server. Useful for tests and for
//! running the form without a backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};
use tracing::debug;

use crate::domain::{DomainError, RegistrationPayload, RegistrationService};

#[derive(Debug, Default)]
pub struct InMemoryRegistrationService {
    calls: AtomicUsize,
    payloads: RwLock<Vec<RegistrationPayload>>,
    failure: Option<DomainError>,
    gate: Option<Arc<Notify>>,
}

impl InMemoryRegistrationService {
    /// Accept every registration immediately
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every registration with the given error
    pub fn failing(error: DomainError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Keep every call pending until [`release`](Self::release) is called
    pub fn held() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            ..Self::default()
        }
    }

    /// Let one held call resolve. Has no effect unless built with [`held`](Self::held).
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Number of `register` calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Payloads received, in call order
    pub async fn payloads(&self) -> Vec<RegistrationPayload> {
        self.payloads.read().await.clone()
    }
}

#[async_trait]
impl RegistrationService for InMemoryRegistrationService {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.payloads.write().await.push(payload.clone());
        debug!(call, username = %payload.username, "In-memory registration received");

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
