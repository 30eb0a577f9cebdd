//! Wires config into an overlay controller; shared by both run modes.

use std::sync::Arc;

use nova_common::{NovaError, Result};
use nova_config::schema::{NovaConfig, OverlayConfig};
use nova_overlay::{CallbackClient, HttpTransport, OverlayController, OverlaySettings, OverlaySurface};

pub fn settings_from_config(config: &OverlayConfig) -> OverlaySettings {
    OverlaySettings {
        tick_interval: config.tick_interval(),
        completion_delay: config.completion_delay(),
    }
}

/// Build a controller drawing into `surface` and calling back to `resource`.
pub fn build_controller<S: OverlaySurface>(
    surface: S,
    config: &NovaConfig,
    resource: &str,
) -> Result<OverlayController<S>> {
    let transport = HttpTransport::new(
        config.callbacks.timeout(),
        config.callbacks.connect_timeout(),
    )?;
    let callbacks = CallbackClient::new(Arc::new(transport), resource)
        .with_scheme(config.callbacks.scheme.as_str());

    Ok(OverlayController::new(
        surface,
        callbacks,
        settings_from_config(&config.overlay),
    ))
}

/// Single-worker runtime the controller and its callbacks run on.
pub fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("nova-overlay")
        .enable_all()
        .build()
        .map_err(NovaError::from)
}
