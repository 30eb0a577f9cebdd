//! NovaApp struct definition and constructor.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use nova_config::NovaConfig;
use nova_overlay::{OverlayHandle, SurfaceState, SurfaceUpdate};
use nova_webview::{WebViewHandle, WebViewManager};

/// Top-level application state.
pub struct NovaApp {
    pub(super) config: NovaConfig,
    /// Parent resource that receives callbacks.
    pub(super) resource: String,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Overlay page
    pub(super) webviews: Option<WebViewManager>,
    pub(super) webview: Option<WebViewHandle>,
    /// Set once the page reports `ready`; renders are held back until then.
    pub(super) page_ready: bool,
    /// What the page should currently show.
    pub(super) rendered: SurfaceState,

    // Overlay controller
    pub(super) overlay: Option<OverlayHandle>,
    pub(super) surface_rx: Option<mpsc::Receiver<SurfaceUpdate>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl NovaApp {
    pub fn new(config: NovaConfig, resource: String) -> Self {
        Self {
            config,
            resource,
            window: None,
            webviews: None,
            webview: None,
            page_ready: false,
            rendered: SurfaceState::default(),
            overlay: None,
            surface_rx: None,
            tokio_runtime: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
