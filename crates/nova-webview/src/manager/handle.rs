use tracing::trace;
use wry::WebView;

use crate::ipc::js_dispatch_message;

/// The live overlay page. Dropping it destroys the WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    /// URL the page was created with.
    pub(super) url: String,
}

impl WebViewHandle {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Deliver `payload` to the page's `window.nova.ipc.on(kind, ...)` listeners.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        trace!(kind, "IPC to overlay page");
        self.webview.evaluate_script(&js_dispatch_message(kind, payload))
    }

    /// Resize the page within its parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Give the page keyboard focus so its keydown listener sees Escape.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}
