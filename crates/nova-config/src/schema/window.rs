//! Overlay window and webview configuration types.

use serde::{Deserialize, Serialize};

/// Native window hosting the overlay page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 100-7680).
    pub width: u32,
    /// Logical height in pixels (valid range: 40-4320).
    pub height: u32,
    pub transparent: bool,
    pub always_on_top: bool,
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "NOVA".into(),
            width: 480,
            height: 120,
            transparent: true,
            always_on_top: true,
            decorations: false,
        }
    }
}

/// Embedded webview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    pub devtools: bool,
    /// Serve the overlay page from this directory instead of the bundled copy.
    pub assets_dir: Option<String>,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            assets_dir: None,
        }
    }
}
