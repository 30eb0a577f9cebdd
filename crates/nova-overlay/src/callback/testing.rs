//! In-memory host transport for tests.

use std::sync::Arc;

use async_trait::async_trait;
use nova_common::CallbackError;
use serde_json::Value;
use tokio::sync::mpsc;

use super::transport::HostTransport;

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub url: String,
    pub body: Value,
}

/// Records every call and answers with a fixed result.
pub(crate) struct RecordingTransport {
    result: Result<Value, CallbackError>,
    calls: mpsc::UnboundedSender<RecordedCall>,
}

impl RecordingTransport {
    pub fn replying(reply: Value) -> (Arc<Self>, mpsc::UnboundedReceiver<RecordedCall>) {
        Self::with_result(Ok(reply))
    }

    pub fn failing(error: CallbackError) -> (Arc<Self>, mpsc::UnboundedReceiver<RecordedCall>) {
        Self::with_result(Err(error))
    }

    fn with_result(
        result: Result<Value, CallbackError>,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<RecordedCall>) {
        let (calls, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { result, calls }), rx)
    }
}

#[async_trait]
impl HostTransport for RecordingTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, CallbackError> {
        let _ = self.calls.send(RecordedCall {
            url: url.to_string(),
            body: body.clone(),
        });
        self.result.clone()
    }
}
