//! WebView lifecycle management.
//!
//! `WebViewManager` builds the overlay `wry::WebView`, wires its handlers
//! into a shared event sink, and serves the page over `nova://`.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::{WebViewConfig, OVERLAY_URL};

/// Builds the overlay WebView and collects its events.
pub struct WebViewManager {
    /// Event sink. Events are pushed here for the UI thread to drain.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Arc<ContentProvider>,
}

impl WebViewManager {
    pub fn new(content_provider: ContentProvider) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(content_provider),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(ContentProvider::bundled())
    }
}
