//! HTML escaping for untrusted label text.

/// Escape `text` for insertion as markup so it renders as the same plain text.
///
/// Mirrors how a browser serializes a text node: `&`, `<`, `>` and the
/// no-break space become entities, everything else passes through.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}
