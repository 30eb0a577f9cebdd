/// Address of the bundled overlay page.
pub const OVERLAY_URL: &str = "nova://localhost/overlay/index.html";

/// Configuration for creating the overlay WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: OVERLAY_URL.to_string(),
            transparent: true,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("NOVA/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}
