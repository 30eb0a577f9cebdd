//! Bridge between the overlay page and the controller.
//!
//! Page -> controller: IPC messages are validated against an allowlist and
//! turned into controller events. Controller -> page: surface updates are
//! forwarded as `overlay_render` messages once the page is ready.

use nova_overlay::surface::RENDER_IPC_KIND;
use nova_overlay::SurfaceUpdate;
use nova_webview::IpcMessage;
use serde_json::Value;

use super::core::NovaApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from JavaScript.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &["host_message", "keydown", "ready"];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

/// What an accepted page message asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    /// A message the host posted into the page.
    HostMessage(Value),
    /// A key went down inside the page.
    Key(String),
    /// The page has registered its render handlers.
    Ready,
}

/// Validate and decode a raw IPC body.
pub fn route_ipc(body: &str) -> Option<PageAction> {
    let msg = match IpcMessage::from_json(body) {
        Some(m) => m,
        None => {
            tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
            return None;
        }
    };

    if !is_ipc_kind_allowed(&msg.kind) {
        tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind");
        return None;
    }

    match msg.kind.as_str() {
        "host_message" => Some(PageAction::HostMessage(msg.payload.to_value())),
        "keydown" => {
            let payload = msg.payload.to_value();
            match payload.get("key").and_then(Value::as_str) {
                Some(key) => Some(PageAction::Key(key.to_string())),
                None => {
                    tracing::warn!("keydown IPC without a key name");
                    None
                }
            }
        }
        "ready" => Some(PageAction::Ready),
        _ => None,
    }
}

/// Bounds covering the whole window, in physical pixels.
pub fn window_bounds(width: u32, height: u32) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(width, height)),
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

impl NovaApp {
    /// Handle a single IPC message from the overlay page.
    pub(super) fn handle_ipc_message(&mut self, body: &str) {
        let Some(action) = route_ipc(body) else {
            return;
        };
        tracing::debug!(?action, "IPC message dispatched");

        match action {
            PageAction::HostMessage(message) => {
                if let Some(overlay) = &self.overlay {
                    overlay.host_message(message);
                }
            }
            PageAction::Key(key) => {
                if let Some(overlay) = &self.overlay {
                    overlay.key(key);
                }
            }
            PageAction::Ready => {
                self.page_ready = true;
                self.push_full_state();
            }
        }
    }

    /// Record an update and send it to the page if it is listening.
    pub(super) fn render(&mut self, update: SurfaceUpdate) {
        self.rendered.apply(&update);
        if self.page_ready {
            self.send_render(&update);
        }
    }

    /// Bring a freshly loaded page up to date.
    fn push_full_state(&self) {
        let state = &self.rendered;
        self.send_render(&SurfaceUpdate::Label(state.label.clone()));
        self.send_render(&SurfaceUpdate::Fill(state.fill));
        self.send_render(&SurfaceUpdate::Visible(state.visible));
    }

    fn send_render(&self, update: &SurfaceUpdate) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.send_ipc(RENDER_IPC_KIND, &update.to_ipc()) {
                tracing::warn!(error = %e, "Failed to send render update");
            }
        }
    }

    /// Resize the page to cover the window.
    pub(super) fn sync_webview_bounds(&self) {
        let (Some(window), Some(webview)) = (&self.window, &self.webview) else {
            return;
        };
        let size = window.inner_size();
        if let Err(e) = webview.set_bounds(window_bounds(size.width, size.height)) {
            tracing::warn!(error = %e, "Failed to resize overlay page");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn allowlist_accepts_page_kinds() {
        assert!(is_ipc_kind_allowed("host_message"));
        assert!(is_ipc_kind_allowed("keydown"));
        assert!(is_ipc_kind_allowed("ready"));
    }

    #[test]
    fn allowlist_rejects_everything_else() {
        assert!(!is_ipc_kind_allowed("closeUI"));
        assert!(!is_ipc_kind_allowed("overlay_render"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("Ready"));
    }

    #[test]
    fn routes_host_message_payload() {
        let body = r#"{"kind":"host_message","payload":{"action":"progressbar","label":"Mining","duration":3000}}"#;
        assert_eq!(
            route_ipc(body),
            Some(PageAction::HostMessage(json!({
                "action": "progressbar",
                "label": "Mining",
                "duration": 3000
            })))
        );
    }

    #[test]
    fn routes_keydown() {
        let body = r#"{"kind":"keydown","payload":{"key":"Escape"}}"#;
        assert_eq!(route_ipc(body), Some(PageAction::Key("Escape".into())));
    }

    #[test]
    fn keydown_without_key_is_dropped() {
        assert_eq!(route_ipc(r#"{"kind":"keydown","payload":{}}"#), None);
        assert_eq!(route_ipc(r#"{"kind":"keydown","payload":{"key":27}}"#), None);
    }

    #[test]
    fn routes_ready_without_payload() {
        assert_eq!(route_ipc(r#"{"kind":"ready"}"#), Some(PageAction::Ready));
    }

    #[test]
    fn rejects_unknown_and_malformed() {
        assert_eq!(route_ipc(r#"{"kind":"exec","payload":"rm -rf"}"#), None);
        assert_eq!(route_ipc("not json"), None);
        assert_eq!(route_ipc(r#"{"payload":{}}"#), None);
    }

    #[test]
    fn bounds_cover_window() {
        let rect = window_bounds(480, 120);
        match rect.position {
            wry::dpi::Position::Physical(pos) => assert_eq!((pos.x, pos.y), (0, 0)),
            _ => panic!("Expected physical position"),
        }
        match rect.size {
            wry::dpi::Size::Physical(size) => assert_eq!((size.width, size.height), (480, 120)),
            _ => panic!("Expected physical size"),
        }
    }

    #[test]
    fn renders_are_held_until_ready() {
        let mut app = NovaApp::new(nova_config::NovaConfig::default(), "nova_core".into());
        app.render(SurfaceUpdate::Label("Crafting".into()));
        app.render(SurfaceUpdate::Visible(true));
        assert!(!app.page_ready);
        assert_eq!(app.rendered.label, "Crafting");
        assert!(app.rendered.visible);

        app.handle_ipc_message(r#"{"kind":"ready"}"#);
        assert!(app.page_ready);
    }
}
