use std::time::Duration;

use async_trait::async_trait;
use nova_common::CallbackError;
use serde_json::Value;
use tracing::debug;

/// Carries a JSON POST to the host and returns its parsed JSON reply.
#[async_trait]
pub trait HostTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, CallbackError>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration) -> Result<Self, CallbackError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| CallbackError::Transport(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an already-configured client.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HostTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, CallbackError> {
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        // The host answers with JSON whatever the status, so status is informational.
        let status = response.status();
        debug!(url = %url, %status, "host callback response");

        let bytes = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&bytes).map_err(|e| CallbackError::Decode(e.to_string()))
    }
}

fn classify(e: reqwest::Error) -> CallbackError {
    if e.is_timeout() {
        CallbackError::Timeout(e.to_string())
    } else if e.is_decode() {
        CallbackError::Decode(e.to_string())
    } else {
        CallbackError::Transport(e.to_string())
    }
}
