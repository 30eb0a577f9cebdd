//! Windowless mode: the controller draws into the log.

use nova_common::Result;
use nova_config::NovaConfig;
use nova_overlay::{OverlaySurface, SurfaceState, SurfaceUpdate};
use tracing::{debug, info};

use crate::host_input::{self, EofAction};
use crate::overlay_setup;

/// Surface that records what would be shown and logs visible changes.
#[derive(Debug, Default)]
pub struct LogSurface {
    state: SurfaceState,
}

impl LogSurface {
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }
}

impl OverlaySurface for LogSurface {
    fn set_label(&mut self, label: &str) {
        self.state.apply(&SurfaceUpdate::Label(label.to_string()));
        info!(label = %label, "progress label");
    }

    fn set_fill(&mut self, percent: f64) {
        self.state.apply(&SurfaceUpdate::Fill(percent));
        debug!(fill = percent, "progress fill");
    }

    fn set_visible(&mut self, visible: bool) {
        if self.state.visible != visible {
            info!(visible, "progress bar visibility changed");
        }
        self.state.apply(&SurfaceUpdate::Visible(visible));
    }
}

/// Run until stdin closes.
pub fn run(config: &NovaConfig, resource: &str) -> Result<()> {
    let runtime = overlay_setup::build_runtime()?;
    let controller = overlay_setup::build_controller(LogSurface::default(), config, resource)?;

    host_input::spawn_stdin_reader(controller.handle(), EofAction::Shutdown)?;

    info!("running headless, reading host messages from stdin");
    runtime.block_on(controller.run());
    Ok(())
}
