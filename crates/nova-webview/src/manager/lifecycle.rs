use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Custom protocol scheme serving the bundled page.
const PROTOCOL: &str = "nova";

impl WebViewManager {
    /// Create the overlay WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(true)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(url = %config.url, "overlay WebView created");

        Ok(WebViewHandle {
            webview,
            url: config.url,
        })
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let cp = Arc::clone(&self.content_provider);
        builder.with_custom_protocol(PROTOCOL.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = protocol_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => {
                    respond(StatusCode::OK, &mime, Cow::Owned(data.into_owned()))
                }
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    respond(
                        StatusCode::NOT_FOUND,
                        "text/plain",
                        Cow::Borrowed(b"Not Found".as_slice()),
                    )
                }
            }
        })
    }
}

/// Strip the scheme and host from a `nova://` (or WebView2-rewritten) URI.
fn protocol_path(uri: &str) -> &str {
    let rest = uri
        .strip_prefix("nova://localhost/")
        .or_else(|| uri.strip_prefix("http://nova.localhost/"))
        .or_else(|| uri.strip_prefix("nova://localhost"))
        .or_else(|| uri.strip_prefix("nova:///"))
        .or_else(|| uri.strip_prefix("nova://"))
        .unwrap_or("");
    rest.split(['?', '#']).next().unwrap_or("")
}

fn respond(
    status: StatusCode,
    mime: &str,
    body: Cow<'static, [u8]>,
) -> Response<Cow<'static, [u8]>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;

    let headers = response.headers_mut();
    match HeaderValue::from_str(mime) {
        Ok(value) => {
            headers.insert(CONTENT_TYPE, value);
        }
        Err(e) => warn!(mime = %mime, error = %e, "custom protocol: invalid MIME type"),
    }
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("nova://localhost"),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_scheme_and_host() {
        assert_eq!(
            protocol_path("nova://localhost/overlay/index.html"),
            "overlay/index.html"
        );
        assert_eq!(
            protocol_path("http://nova.localhost/overlay/overlay.css"),
            "overlay/overlay.css"
        );
        assert_eq!(protocol_path("nova:///overlay/overlay.js"), "overlay/overlay.js");
    }

    #[test]
    fn drops_query_and_fragment() {
        assert_eq!(
            protocol_path("nova://localhost/overlay/index.html?v=2#top"),
            "overlay/index.html"
        );
    }

    #[test]
    fn foreign_uri_maps_to_empty_path() {
        assert_eq!(protocol_path("https://example.com/overlay/index.html"), "");
    }

    #[test]
    fn respond_sets_status_and_mime() {
        let response = respond(StatusCode::OK, "text/css", Cow::Borrowed(b"a{}".as_slice()));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "text/css");
        assert_eq!(response.body().as_ref(), b"a{}");
    }
}
