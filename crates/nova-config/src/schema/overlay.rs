//! Progress overlay timing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing of the progress bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Fill refresh cadence in milliseconds (valid range: 10-1000).
    pub tick_interval_ms: u32,
    /// How long a full bar stays on screen before hiding (valid range: 0-5000).
    pub completion_delay_ms: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
            completion_delay_ms: 200,
        }
    }
}

impl OverlayConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.completion_delay_ms))
    }
}
