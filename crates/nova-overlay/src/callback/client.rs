use std::sync::Arc;

use nova_common::CallbackError;
use serde_json::{Map, Value};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use super::transport::HostTransport;

/// Build the callback URL for `name` on `resource`.
pub fn callback_url(scheme: &str, resource: &str, name: &str) -> String {
    format!("{scheme}://{resource}/{name}")
}

/// Result of a host callback, before it is collapsed for callers.
#[derive(Debug, Clone, PartialEq)]
pub enum CallbackOutcome {
    /// The host answered with this JSON (which may itself be `null`).
    Replied(Value),
    Failed(CallbackError),
}

impl CallbackOutcome {
    /// The caller-facing value: the reply, or `null` on failure.
    pub fn into_value(self) -> Value {
        match self {
            Self::Replied(value) => value,
            Self::Failed(_) => Value::Null,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Issues named callbacks to the parent resource.
#[derive(Clone)]
pub struct CallbackClient {
    transport: Arc<dyn HostTransport>,
    scheme: String,
    resource: String,
}

impl CallbackClient {
    pub fn new(transport: Arc<dyn HostTransport>, resource: impl Into<String>) -> Self {
        Self {
            transport,
            scheme: "https".into(),
            resource: resource.into(),
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn url_for(&self, name: &str) -> String {
        callback_url(&self.scheme, &self.resource, name)
    }

    /// Perform the call and report exactly what happened.
    pub async fn call(&self, name: &str, payload: Map<String, Value>) -> CallbackOutcome {
        let url = self.url_for(name);
        debug!(callback = %name, url = %url, "host callback");

        match self.transport.post_json(&url, &Value::Object(payload)).await {
            Ok(reply) => {
                debug!(callback = %name, reply = %reply, "host callback replied");
                CallbackOutcome::Replied(reply)
            }
            Err(e) => {
                error!(callback = %name, error = %e, "host callback failed");
                CallbackOutcome::Failed(e)
            }
        }
    }

    /// Perform the call; resolves to the reply or `null`, never an error.
    ///
    /// A `None` payload sends an empty object.
    pub async fn send_callback(&self, name: &str, payload: Option<Map<String, Value>>) -> Value {
        self.call(name, payload.unwrap_or_default()).await.into_value()
    }

    /// Fire-and-forget variant of [`send_callback`](Self::send_callback).
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_callback(
        &self,
        name: &str,
        payload: Option<Map<String, Value>>,
    ) -> JoinHandle<Value> {
        let client = self.clone();
        let name = name.to_string();
        tokio::spawn(async move { client.send_callback(&name, payload).await })
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingTransport;
    use super::*;
    use serde_json::json;

    #[test]
    fn url_uses_scheme_resource_and_name() {
        assert_eq!(
            callback_url("https", "nova_core", "closeUI"),
            "https://nova_core/closeUI"
        );
    }

    #[tokio::test]
    async fn empty_payload_by_default() {
        let (transport, mut calls) = RecordingTransport::replying(json!({ "ok": true }));
        let client = CallbackClient::new(transport, "nova_core");

        let reply = client.send_callback("closeUI", None).await;
        assert_eq!(reply, json!({ "ok": true }));

        let call = calls.recv().await.unwrap();
        assert_eq!(call.url, "https://nova_core/closeUI");
        assert_eq!(call.body, json!({}));
    }

    #[tokio::test]
    async fn payload_is_sent_as_body() {
        let (transport, mut calls) = RecordingTransport::replying(Value::Null);
        let client = CallbackClient::new(transport, "nova_bank").with_scheme("http");

        let mut payload = Map::new();
        payload.insert("amount".into(), json!(250));
        client.send_callback("deposit", Some(payload)).await;

        let call = calls.recv().await.unwrap();
        assert_eq!(call.url, "http://nova_bank/deposit");
        assert_eq!(call.body, json!({ "amount": 250 }));
    }

    fn payload(value: Value) -> Option<Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    #[tokio::test]
    async fn any_name_and_payload_reaches_the_host_as_is() {
        let cases = [
            ("closeUI", None, json!({})),
            ("selectOption", payload(json!({ "index": 2 })), json!({ "index": 2 })),
            (
                "deposit",
                payload(json!({ "amount": 250, "account": "savings" })),
                json!({ "amount": 250, "account": "savings" }),
            ),
            (
                "setWaypoint",
                payload(json!({ "x": -12.5, "y": 300.0, "note": "<b>Camp</b> & co" })),
                json!({ "x": -12.5, "y": 300.0, "note": "<b>Camp</b> & co" }),
            ),
            (
                "equip",
                payload(json!({ "slots": [1, 2, 3], "meta": { "tier": null } })),
                json!({ "slots": [1, 2, 3], "meta": { "tier": null } }),
            ),
        ];

        for (name, body, expected) in cases {
            let reply = json!({ "handled": name });
            let (transport, mut calls) = RecordingTransport::replying(reply.clone());
            let client = CallbackClient::new(transport, "nova_core");

            assert_eq!(client.send_callback(name, body.clone()).await, reply);
            let call = calls.recv().await.unwrap();
            assert_eq!(call.url, format!("https://nova_core/{name}"));
            assert_eq!(call.body, expected);

            let (transport, mut calls) =
                RecordingTransport::failing(CallbackError::Transport("refused".into()));
            let client = CallbackClient::new(transport, "nova_core");
            assert_eq!(client.send_callback(name, body).await, Value::Null);
            assert_eq!(calls.recv().await.unwrap().body, expected);
        }
    }

    #[tokio::test]
    async fn failure_resolves_to_null() {
        for error in [
            CallbackError::Transport("connection refused".into()),
            CallbackError::Timeout("10s".into()),
            CallbackError::Decode("expected value".into()),
        ] {
            let (transport, _calls) = RecordingTransport::failing(error);
            let client = CallbackClient::new(transport, "nova_core");
            assert_eq!(client.send_callback("closeUI", None).await, Value::Null);
        }
    }

    #[tokio::test]
    async fn outcome_distinguishes_null_reply_from_failure() {
        let (ok, _) = RecordingTransport::replying(Value::Null);
        let replied = CallbackClient::new(ok, "nova_core")
            .call("closeUI", Map::new())
            .await;
        assert_eq!(replied, CallbackOutcome::Replied(Value::Null));
        assert!(!replied.is_failure());

        let (bad, _) = RecordingTransport::failing(CallbackError::Transport("down".into()));
        let failed = CallbackClient::new(bad, "nova_core")
            .call("closeUI", Map::new())
            .await;
        assert!(failed.is_failure());

        // Both collapse to the same caller-facing value.
        assert_eq!(replied.into_value(), failed.into_value());
    }

    #[tokio::test]
    async fn spawned_callback_runs_to_completion() {
        let (transport, mut calls) = RecordingTransport::replying(json!("bye"));
        let client = CallbackClient::new(transport, "nova_core");

        let handle = client.spawn_callback("closeUI", None);
        assert_eq!(handle.await.unwrap(), json!("bye"));
        assert_eq!(calls.recv().await.unwrap().url, "https://nova_core/closeUI");
    }
}
