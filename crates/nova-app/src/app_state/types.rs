use std::time::Duration;

/// How often webview events and surface updates are drained.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// How long shutdown waits for in-flight callbacks.
pub(super) const RUNTIME_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);
