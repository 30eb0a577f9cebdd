//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use super::core::NovaApp;

/// Key name as the page would report it (`KeyboardEvent.key`).
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

impl ApplicationHandler for NovaApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) || !self.start_overlay() {
            self.shutdown();
            event_loop.exit();
            return;
        }

        // Without the page the overlay still runs; keys reach it from the window.
        if !self.initialize_webview() {
            tracing::warn!("Overlay page unavailable, nothing will be drawn");
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_webview_bounds();
                }
            }

            // Keep keyboard focus on the page so it sees Escape.
            WindowEvent::Focused(true) => {
                if let Some(webview) = &self.webview {
                    if let Err(e) = webview.focus() {
                        tracing::debug!(error = %e, "Failed to focus overlay page");
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl NovaApp {
    /// Forward key presses the page did not see.
    ///
    /// Once the page is ready it reports its own keydowns over IPC, so
    /// window-level keys are only used before that to avoid double delivery.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || self.page_ready {
            return;
        }
        let Some(name) = key_name(&event.logical_key) else {
            return;
        };
        if let Some(overlay) = &self.overlay {
            overlay.key(name);
        }
    }
}
