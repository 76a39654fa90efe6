//! Outbound HTTP capability.

use crate::error::DriverError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Request headers for an outbound call.
pub type Headers = BTreeMap<String, String>;

/// Form fields of an outbound call.
pub type FormBody = BTreeMap<String, String>;

/// Performs the outbound calls a driver makes.
///
/// Timeouts and retries belong to the implementation, not to the driver.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post(&self, url: &str, headers: &Headers, body: &FormBody)
        -> Result<(), DriverError>;
}

/// [`HttpClient`] backed by reqwest, posting form-encoded bodies.
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a client with a 30 second timeout.
    pub fn new() -> Result<Self, DriverError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, DriverError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    #[instrument(skip(self, headers, body))]
    async fn post(
        &self,
        url: &str,
        headers: &Headers,
        body: &FormBody,
    ) -> Result<(), DriverError> {
        let mut request = self.client.post(url).form(body);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let msg = response.text().await.unwrap_or_default();
            warn!("POST {} failed with {}: {}", url, status, msg);
            return Err(DriverError::Api(msg));
        }

        debug!("POST {} succeeded", url);
        Ok(())
    }
}
