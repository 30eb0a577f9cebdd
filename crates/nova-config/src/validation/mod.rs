//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::NovaConfig;
use nova_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NovaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_overlay(&mut errors, config);
    sections::validate_callbacks(&mut errors, config);
    sections::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
