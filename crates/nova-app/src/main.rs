mod app_state;
mod cli;
mod headless;
mod host_input;
mod logging;
mod overlay_setup;

use std::path::Path;

use nova_config::schema::NovaConfig;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("NOVA overlay crashed: {info}");
        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();
    let level_handle = logging::init(args.log_level.as_deref());

    tracing::info!("NOVA overlay v{} starting...", env!("CARGO_PKG_VERSION"));

    let loaded = match &args.config {
        Some(path) => {
            tracing::info!("Using config override: {path}");
            nova_config::load_config_from(Path::new(path))
        }
        None => nova_config::load_config(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            NovaConfig::default()
        }
    };
    if let Some(handle) = &level_handle {
        logging::apply_config_level(handle, args.log_level.as_deref(), config.logging.level);
    }

    let resource = nova_overlay::resource::resolve_parent_resource(
        args.resource.as_deref(),
        &config.callbacks.default_resource,
    );
    tracing::info!(resource = %resource, "callbacks target parent resource");

    if args.headless {
        if let Err(e) = headless::run(&config, &resource) {
            tracing::error!("Headless overlay failed: {e}");
            std::process::exit(1);
        }
        tracing::info!("Shutdown complete");
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::NovaApp::new(config, resource);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
