//! NOVA overlay configuration.
//!
//! TOML-based configuration with validation. Every section uses serde
//! defaults, so an empty file (or no file at all) yields the stock overlay:
//! a 50 ms progress tick, a 200 ms completion hold, and callbacks posted to
//! `https://nova_core/<name>`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use nova_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("tick every {} ms", config.overlay.tick_interval_ms);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::NovaConfig;
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use nova_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<NovaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<NovaConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
