//! User key handling.

/// Key name that asks the host to close the UI.
pub const ESCAPE_KEY: &str = "Escape";

/// Callback issued when the user presses Escape.
pub const CLOSE_UI_CALLBACK: &str = "closeUI";

/// Exact match only; `"Esc"` or `"escape"` do not close the UI.
pub fn is_close_key(key: &str) -> bool {
    key == ESCAPE_KEY
}
