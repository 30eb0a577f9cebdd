use crate::schema::NovaConfig;

use super::helpers::validate_range;

pub(crate) fn validate_overlay(errors: &mut Vec<String>, config: &NovaConfig) {
    validate_range(
        errors,
        "overlay.tick_interval_ms",
        config.overlay.tick_interval_ms,
        10,
        1000,
    );
    validate_range(
        errors,
        "overlay.completion_delay_ms",
        config.overlay.completion_delay_ms,
        0,
        5000,
    );
}

pub(crate) fn validate_callbacks(errors: &mut Vec<String>, config: &NovaConfig) {
    let resource = &config.callbacks.default_resource;
    if resource.trim().is_empty() {
        errors.push("callbacks.default_resource must not be empty".into());
    } else if resource.contains(['/', '?', '#', ' ']) {
        errors.push(format!(
            "callbacks.default_resource = {resource:?} must be a bare host name"
        ));
    }
    validate_range(
        errors,
        "callbacks.timeout_ms",
        config.callbacks.timeout_ms,
        100,
        120_000,
    );
    validate_range(
        errors,
        "callbacks.connect_timeout_ms",
        config.callbacks.connect_timeout_ms,
        100,
        60_000,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &NovaConfig) {
    validate_range(errors, "window.width", config.window.width, 100, 7680);
    validate_range(errors, "window.height", config.window.height, 40, 4320);
}
