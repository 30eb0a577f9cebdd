use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for webview navigation.
///
/// The overlay only ever shows its own bundled page, so each prefix pins the
/// host and ends at the path separator.
/// - `nova://localhost/`: custom protocol for the bundled overlay assets
/// - `http://nova.localhost/`: WebView2 rewrite of `nova://localhost/…`
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["nova://localhost/", "http://nova.localhost/"];

/// Default empty page, matched exactly.
const BLANK_PAGE: &str = "about:blank";

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    url == BLANK_PAGE
        || ALLOWED_NAV_PREFIXES
            .iter()
            .any(|prefix| url.starts_with(prefix))
}

fn push_event(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(body_len = body.len(), "IPC message from page");
            push_event(&events, WebViewEvent::IpcMessage { body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            push_event(&events, WebViewEvent::PageLoad { state, url });
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            push_event(&events, WebViewEvent::TitleChanged { title });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            push_event(&events, WebViewEvent::NavigationRequested { url });
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_overlay_page() {
        assert!(is_navigation_allowed("nova://localhost/overlay/index.html"));
        assert!(is_navigation_allowed("nova://localhost/overlay/overlay.js"));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        assert!(is_navigation_allowed(
            "http://nova.localhost/overlay/index.html"
        ));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn blocks_remote_origins() {
        assert!(!is_navigation_allowed("https://nova_core/closeUI"));
        assert!(!is_navigation_allowed("https://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
    }

    #[test]
    fn blocks_script_data_and_file_urls() {
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>XSS</h1>"));
        assert!(!is_navigation_allowed("file:///etc/passwd"));
    }

    #[test]
    fn blocks_empty_and_garbage() {
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
        assert!(!is_navigation_allowed("novax://localhost"));
    }

    #[test]
    fn blocks_lookalike_host() {
        assert!(!is_navigation_allowed(
            "http://nova.localhost.attacker.example/phish.html"
        ));
        assert!(!is_navigation_allowed("http://nova.localhost:9000/overlay/index.html"));
        assert!(!is_navigation_allowed("http://nova.localhost@evil.com/"));
        assert!(!is_navigation_allowed("nova://evil.example/overlay/index.html"));
        assert!(!is_navigation_allowed("nova://localhost.evil/index.html"));
        assert!(!is_navigation_allowed("about:blank#injected"));
        assert!(!is_navigation_allowed("about:blankety"));
    }

    #[test]
    fn push_event_appends() {
        let events = Mutex::new(Vec::new());
        push_event(&events, WebViewEvent::TitleChanged { title: "NOVA".into() });
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}
