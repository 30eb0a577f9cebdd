//! Display commands posted by the host into the page.
//!
//! Messages are JSON objects tagged by `action`:
//! - `{ "action": "progressbar", "label": "...", "duration": 5000 }`
//! - `{ "action": "hideProgressbar" }`
//!
//! Validation is by shape only. Missing or mistyped fields degrade to an
//! empty label or a zero duration; unknown actions parse to `Unknown`.

use std::time::Duration;

use serde_json::Value;

pub const ACTION_SHOW: &str = "progressbar";
pub const ACTION_HIDE: &str = "hideProgressbar";

/// A decoded host display command.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundCommand {
    Show { label: String, duration: Duration },
    Hide,
    /// Any other action. Carries the action name when there was one.
    Unknown(Option<String>),
}

impl InboundCommand {
    /// Decode a host message. Never fails: anything unrecognised is `Unknown`.
    pub fn from_value(value: &Value) -> Self {
        let action = match value.get("action").and_then(Value::as_str) {
            Some(a) => a,
            None => return Self::Unknown(None),
        };

        match action {
            ACTION_SHOW => Self::Show {
                label: label_field(value.get("label")),
                duration: duration_field(value.get("duration")),
            },
            ACTION_HIDE => Self::Hide,
            other => Self::Unknown(Some(other.to_string())),
        }
    }

    /// Parse a raw JSON host message. Returns `None` if the text is not JSON.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str::<Value>(raw)
            .ok()
            .map(|v| Self::from_value(&v))
    }
}

fn label_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Milliseconds from a number or a numeric string. Negative, non-finite and
/// missing values all become zero, which completes on the first tick.
fn duration_field(value: Option<&Value>) -> Duration {
    let ms = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match ms {
        Some(ms) if ms.is_finite() && ms > 0.0 => Duration::from_nanos((ms * 1_000_000.0) as u64),
        _ => Duration::ZERO,
    }
}
