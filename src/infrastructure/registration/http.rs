use async_trait::async_trait;
use tracing::info;

use crate::domain::{DomainError, RegistrationPayload, RegistrationService};
use crate::infrastructure::http_client::HttpClientTrait;

/// Path of the user-creation endpoint, relative to the API base URL
pub const REGISTRATION_PATH: &str = "/api/1.0/users";

/// Registration over HTTP: `POST {base_url}/api/1.0/users` with a JSON body
#[derive(Debug)]
pub struct HttpRegistrationService<C: HttpClientTrait> {
    client: C,
    base_url: String,
}

impl<C: HttpClientTrait> HttpRegistrationService<C> {
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { client, base_url }
    }

    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url, REGISTRATION_PATH)
    }
}

#[async_trait]
impl<C: HttpClientTrait> RegistrationService for HttpRegistrationService<C> {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), DomainError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| DomainError::internal(format!("Failed to encode payload: {}", e)))?;

        let url = self.users_url();
        self.client.post_json(&url, &body).await?;

        info!(username = %payload.username, "Account created");
        Ok(())
    }
}
