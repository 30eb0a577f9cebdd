use serde_json::Value;
use tokio::sync::mpsc;
use tracing::debug;

use crate::command::InboundCommand;

use super::OverlayEvent;

/// Cloneable sender into a running `OverlayController`.
///
/// Usable from any thread, including ones outside the tokio runtime.
#[derive(Debug, Clone)]
pub struct OverlayHandle {
    tx: mpsc::UnboundedSender<OverlayEvent>,
}

impl OverlayHandle {
    pub(super) fn new(tx: mpsc::UnboundedSender<OverlayEvent>) -> Self {
        Self { tx }
    }

    /// Post an event. Returns `false` if the controller has stopped.
    pub fn send(&self, event: OverlayEvent) -> bool {
        if self.tx.send(event).is_err() {
            debug!("overlay controller gone, event dropped");
            return false;
        }
        true
    }

    pub fn command(&self, command: InboundCommand) -> bool {
        self.send(OverlayEvent::Command(command))
    }

    pub fn host_message(&self, message: Value) -> bool {
        self.send(OverlayEvent::HostMessage(message))
    }

    pub fn key(&self, key: impl Into<String>) -> bool {
        self.send(OverlayEvent::Key(key.into()))
    }

    pub fn shutdown(&self) -> bool {
        self.send(OverlayEvent::Shutdown)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
