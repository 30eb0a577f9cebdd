//! Configuration schema types for the NOVA overlay.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod callbacks;
mod overlay;
mod system;
mod window;

pub use callbacks::*;
pub use overlay::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct NovaConfig {
    pub overlay: OverlayConfig,
    pub callbacks: CallbackConfig,
    pub window: WindowConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}
