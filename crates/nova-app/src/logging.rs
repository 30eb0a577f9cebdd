//! Tracing setup.
//!
//! The subscriber is installed before config is read so loader messages are
//! kept. Once config is known, the level of our crates is swapped in place.

use nova_config::schema::LogLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Crates whose log output the level setting controls.
const LOG_TARGETS: &[&str] = &["nova_ui", "nova_overlay", "nova_webview", "nova_config"];

/// Retargets the installed filter.
pub type LevelHandle = reload::Handle<EnvFilter, Registry>;

/// Filter directive for our crates at the chosen level. The CLI wins over config.
pub fn log_directive(cli_level: Option<&str>, config_level: LogLevel) -> String {
    let level = cli_level.unwrap_or(config_level.as_filter());
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// A reloadable filter starting at the CLI level, or `info` without one.
pub fn reloadable_filter(
    cli_level: Option<&str>,
) -> (reload::Layer<EnvFilter, Registry>, LevelHandle) {
    reload::Layer::new(EnvFilter::new(log_directive(cli_level, LogLevel::default())))
}

/// Install the global subscriber.
///
/// Returns `None` when `RUST_LOG` owns the filter; config then has no say.
pub fn init(cli_level: Option<&str>) -> Option<LevelHandle> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
        return None;
    }

    let (filter, handle) = reloadable_filter(cli_level);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    Some(handle)
}

/// Apply the configured level unless the CLI already chose one.
pub fn apply_config_level(handle: &LevelHandle, cli_level: Option<&str>, level: LogLevel) {
    if cli_level.is_some() {
        return;
    }
    if let Err(e) = handle.reload(EnvFilter::new(log_directive(None, level))) {
        tracing::warn!("Failed to apply configured log level: {e}");
    }
}
