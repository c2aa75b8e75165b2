//! Order service gateway.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use nexus_core::orders::{SubmitOrderRequest, SubmitOrderResponse};

/// Default request timeout. A timeout is surfaced as a retryable failure,
/// distinct from a validation rejection.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gateway failures. All of them leave the cart and checkout untouched so
/// the user can retry from the Review step.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("order submission timed out")]
    Timeout,

    #[error("failed to reach the order service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("order service returned an unreadable response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The single network call of the checkout flow.
#[automock]
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit the payload once. No automatic retry.
    async fn submit(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, GatewayError>;
}

/// HTTP gateway posting to the order service's checkout endpoint.
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderGateway {
    /// Build a gateway for the given base URL, e.g. `http://localhost:5000`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a gateway with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GatewayError::Transport)?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/checkout", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn submit(
        &self,
        request: &SubmitOrderRequest,
    ) -> Result<SubmitOrderResponse, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|error| {
                if error.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Transport(error)
                }
            })?;

        // Both the 200 and the 400/500 bodies decode into the same untagged
        // response shape.
        response
            .json::<SubmitOrderResponse>()
            .await
            .map_err(GatewayError::Decode)
    }
}
