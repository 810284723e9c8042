use std::time::Duration;

use reqwest::Client;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::common::entities::app_errors::CoreError;

/// Long-lived HTTP client shared by every call of one adapter.
///
/// The client is built on first use and rebuilt on the next call after [`HttpSession::close`].
#[derive(Debug)]
pub struct HttpSession {
    name: &'static str,
    timeout: Duration,
    client: RwLock<Option<Client>>,
}

impl HttpSession {
    pub fn new(name: &'static str, timeout: Duration) -> Self {
        Self {
            name,
            timeout,
            client: RwLock::new(None),
        }
    }

    pub async fn client(&self) -> Result<Client, CoreError> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write().await;
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!(
                    "failed to build {} http client: {e}",
                    self.name
                ))
            })?;
        debug!(session = self.name, "HTTP session opened");
        *slot = Some(client.clone());
        Ok(client)
    }

    pub async fn is_open(&self) -> bool {
        self.client.read().await.is_some()
    }

    pub async fn close(&self) {
        if self.client.write().await.take().is_some() {
            debug!(session = self.name, "HTTP session closed");
        }
    }
}
