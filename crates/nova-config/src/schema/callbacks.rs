//! Outbound host callback configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// URL scheme used for host callbacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CallbackScheme {
    Http,
    #[default]
    Https,
}

impl CallbackScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Host callback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CallbackConfig {
    /// Resource name used when the host does not inject one.
    pub default_resource: String,
    pub scheme: CallbackScheme,
    /// Whole-request timeout in milliseconds (valid range: 100-120000).
    pub timeout_ms: u32,
    /// Connect timeout in milliseconds (valid range: 100-60000).
    pub connect_timeout_ms: u32,
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            default_resource: "nova_core".into(),
            scheme: CallbackScheme::Https,
            timeout_ms: 10_000,
            connect_timeout_ms: 5_000,
        }
    }
}

impl CallbackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.connect_timeout_ms))
    }
}
