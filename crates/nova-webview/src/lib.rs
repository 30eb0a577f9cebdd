//! WebView host for the NOVA overlay page.
//!
//! Wraps the `wry` crate to provide:
//! - The overlay page served from bundled assets over `nova://`
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A navigation allowlist
//! - Page load / title / IPC events for the UI thread to drain

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, OVERLAY_URL};
