//! Render targets for the progress widget.
//!
//! The controller only ever talks to an `OverlaySurface`. The windowed
//! binary uses `ChannelSurface` to hand updates to the UI thread, which
//! forwards them to the page over IPC.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tracing::debug;

use crate::sanitize::escape_html;

/// IPC message kind the page listens on for render updates.
pub const RENDER_IPC_KIND: &str = "overlay_render";

/// Something the progress widget can draw into.
pub trait OverlaySurface: Send {
    fn set_label(&mut self, label: &str);
    /// Fill width as a percentage in `[0, 100]`.
    fn set_fill(&mut self, percent: f64);
    fn set_visible(&mut self, visible: bool);
}

/// A single change to the rendered widget.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceUpdate {
    Label(String),
    Fill(f64),
    Visible(bool),
}

impl SurfaceUpdate {
    /// Payload for a `overlay_render` IPC message.
    ///
    /// Labels travel pre-escaped; the page inserts `label_html` as markup.
    pub fn to_ipc(&self) -> serde_json::Value {
        match self {
            Self::Label(label) => json!({ "label_html": escape_html(label) }),
            Self::Fill(percent) => json!({ "fill": percent }),
            Self::Visible(visible) => json!({ "visible": visible }),
        }
    }
}

/// Snapshot of what a surface currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceState {
    pub visible: bool,
    pub label: String,
    pub fill: f64,
}

impl SurfaceState {
    pub fn apply(&mut self, update: &SurfaceUpdate) {
        match update {
            SurfaceUpdate::Label(label) => self.label.clone_from(label),
            SurfaceUpdate::Fill(percent) => self.fill = *percent,
            SurfaceUpdate::Visible(visible) => self.visible = *visible,
        }
    }
}

// =============================================================================
// CHANNEL SURFACE
// =============================================================================

/// Posts every update to a receiver on another thread.
pub struct ChannelSurface {
    tx: mpsc::Sender<SurfaceUpdate>,
}

impl ChannelSurface {
    pub fn new() -> (Self, mpsc::Receiver<SurfaceUpdate>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn post(&self, update: SurfaceUpdate) {
        if self.tx.send(update).is_err() {
            debug!("surface receiver gone, update dropped");
        }
    }
}

impl OverlaySurface for ChannelSurface {
    fn set_label(&mut self, label: &str) {
        self.post(SurfaceUpdate::Label(label.to_string()));
    }

    fn set_fill(&mut self, percent: f64) {
        self.post(SurfaceUpdate::Fill(percent));
    }

    fn set_visible(&mut self, visible: bool) {
        self.post(SurfaceUpdate::Visible(visible));
    }
}

// =============================================================================
// SHARED SURFACE
// =============================================================================

/// In-memory surface whose state can be read from any clone.
#[derive(Debug, Clone, Default)]
pub struct SharedSurface {
    inner: Arc<Mutex<SharedInner>>,
}

#[derive(Debug, Default)]
struct SharedInner {
    state: SurfaceState,
    updates: usize,
}

impl SharedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> SurfaceState {
        self.inner
            .lock()
            .map(|inner| inner.state.clone())
            .unwrap_or_default()
    }

    /// Total updates applied since creation.
    pub fn update_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.updates).unwrap_or(0)
    }

    fn apply(&self, update: SurfaceUpdate) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.state.apply(&update);
            inner.updates += 1;
        }
    }
}

impl OverlaySurface for SharedSurface {
    fn set_label(&mut self, label: &str) {
        self.apply(SurfaceUpdate::Label(label.to_string()));
    }

    fn set_fill(&mut self, percent: f64) {
        self.apply(SurfaceUpdate::Fill(percent));
    }

    fn set_visible(&mut self, visible: bool) {
        self.apply(SurfaceUpdate::Visible(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_ipc_is_escaped() {
        let payload = SurfaceUpdate::Label("<b>Cuffing</b>".into()).to_ipc();
        assert_eq!(payload["label_html"], "&lt;b&gt;Cuffing&lt;/b&gt;");
    }

    #[test]
    fn fill_and_visibility_ipc() {
        assert_eq!(SurfaceUpdate::Fill(42.5).to_ipc()["fill"], 42.5);
        assert_eq!(SurfaceUpdate::Visible(false).to_ipc()["visible"], false);
    }

    #[test]
    fn channel_surface_forwards_in_order() {
        let (mut surface, rx) = ChannelSurface::new();
        surface.set_label("Fishing");
        surface.set_fill(0.0);
        surface.set_visible(true);

        let updates: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            updates,
            vec![
                SurfaceUpdate::Label("Fishing".into()),
                SurfaceUpdate::Fill(0.0),
                SurfaceUpdate::Visible(true),
            ]
        );
    }

    #[test]
    fn channel_surface_survives_dropped_receiver() {
        let (mut surface, rx) = ChannelSurface::new();
        drop(rx);
        surface.set_visible(true);
    }

    #[test]
    fn shared_surface_clones_see_same_state() {
        let surface = SharedSurface::new();
        let mut writer = surface.clone();
        writer.set_label("Crafting");
        writer.set_fill(30.0);
        writer.set_visible(true);

        let state = surface.snapshot();
        assert_eq!(state.label, "Crafting");
        assert_eq!(state.fill, 30.0);
        assert!(state.visible);
        assert_eq!(surface.update_count(), 3);
    }

    #[test]
    fn default_state_is_hidden_and_empty() {
        let state = SurfaceState::default();
        assert!(!state.visible);
        assert_eq!(state.fill, 0.0);
        assert!(state.label.is_empty());
    }
}
