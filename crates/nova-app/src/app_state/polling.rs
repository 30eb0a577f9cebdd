//! Polling for page events and controller renders.

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use nova_webview::{PageLoadState, WebViewEvent};

use super::core::NovaApp;
use super::types::POLL_INTERVAL;

impl NovaApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_surface_updates();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Overlay page load");
                    // A reload drops the page's render handlers until it says ready again.
                    if state == PageLoadState::Started {
                        self.page_ready = false;
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    tracing::debug!(title = %title, "Overlay page title changed");
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "Overlay page navigation");
                }
            }
        }
    }

    fn poll_surface_updates(&mut self) {
        loop {
            let next = match &self.surface_rx {
                Some(rx) => rx.try_recv(),
                None => return,
            };
            match next {
                Ok(update) => self.render(update),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    tracing::info!("Overlay controller stopped");
                    self.surface_rx = None;
                    self.should_exit = true;
                    return;
                }
            }
        }
    }
}
