//! Window creation, overlay controller startup, and webview setup.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use nova_config::schema::WindowConfig;
use nova_overlay::ChannelSurface;
use nova_webview::{ContentProvider, WebViewConfig, WebViewManager};

use crate::host_input::{self, EofAction};
use crate::overlay_setup;

use super::bridge::window_bounds;
use super::core::NovaApp;

fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let level = if config.always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    };
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_transparent(config.transparent)
        .with_decorations(config.decorations)
        .with_window_level(level)
        .with_inner_size(LogicalSize::new(config.width, config.height))
}

impl NovaApp {
    /// Create the window. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window = match event_loop.create_window(window_attributes(&self.config.window)) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window);
        true
    }

    /// Start the controller on its runtime and begin reading host input.
    /// Returns `false` if the overlay could not be started.
    pub(super) fn start_overlay(&mut self) -> bool {
        let runtime = match overlay_setup::build_runtime() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start overlay runtime: {e}");
                return false;
            }
        };

        let (surface, surface_rx) = ChannelSurface::new();
        let controller =
            match overlay_setup::build_controller(surface, &self.config, &self.resource) {
                Ok(c) => c,
                Err(e) => {
                    tracing::error!("Failed to build overlay controller: {e}");
                    return false;
                }
            };
        let handle = controller.handle();
        runtime.spawn(controller.run());

        // The window owns shutdown; stdin closing only stops input.
        if let Err(e) = host_input::spawn_stdin_reader(handle.clone(), EofAction::Keep) {
            tracing::warn!("Host input unavailable: {e}");
        }

        self.overlay = Some(handle);
        self.surface_rx = Some(surface_rx);
        self.tokio_runtime = Some(runtime);
        true
    }

    /// Create the WebView that renders the overlay page.
    pub(super) fn initialize_webview(&mut self) -> bool {
        let Some(window) = self.window.clone() else {
            return false;
        };

        let provider = match &self.config.webview.assets_dir {
            Some(dir) => {
                tracing::info!(assets_dir = %dir, "Serving overlay assets from disk");
                ContentProvider::bundled().with_base_dir(dir)
            }
            None => ContentProvider::bundled(),
        };
        let manager = WebViewManager::new(provider);

        let config = WebViewConfig {
            transparent: self.config.window.transparent,
            devtools: self.config.webview.devtools,
            ..WebViewConfig::default()
        };
        let size = window.inner_size();
        let bounds = window_bounds(size.width, size.height);

        match manager.create(window.as_ref(), bounds, config) {
            Ok(handle) => {
                tracing::info!(url = %handle.url(), "Overlay page created");
                self.webview = Some(handle);
                self.webviews = Some(manager);
                true
            }
            Err(e) => {
                tracing::error!("Failed to create overlay webview: {e}");
                false
            }
        }
    }
}
