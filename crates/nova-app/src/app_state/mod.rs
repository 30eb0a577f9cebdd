//! Windowed application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Hosts the overlay page in a WebView and bridges it to the
//! overlay controller running on a background tokio runtime.

mod bridge;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::NovaApp;
