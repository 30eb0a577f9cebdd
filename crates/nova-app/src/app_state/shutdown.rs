//! Graceful shutdown: stop the controller, drop the page, stop the runtime.

use super::core::NovaApp;
use super::types::RUNTIME_SHUTDOWN_TIMEOUT;

impl NovaApp {
    /// Shut down all subsystems. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            tracing::info!("Initiating graceful shutdown");
            overlay.shutdown();
        }

        self.webview = None;
        self.webviews = None;
        self.page_ready = false;
        self.surface_rx = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(RUNTIME_SHUTDOWN_TIMEOUT);
        }
    }
}
