//! Local content serving via custom protocol.
//!
//! Registers a `nova://` custom protocol so the WebView can load the overlay
//! page without a local HTTP server. The page ships inside the binary; an
//! optional base directory can override it file by file.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Overlay page assets compiled into the binary, as (path, mime, contents).
const BUNDLED_ASSETS: &[(&str, &str, &str)] = &[
    (
        "overlay/index.html",
        "text/html",
        include_str!("../../../assets/overlay/index.html"),
    ),
    (
        "overlay/overlay.css",
        "text/css",
        include_str!("../../../assets/overlay/overlay.css"),
    ),
    (
        "overlay/overlay.js",
        "application/javascript",
        include_str!("../../../assets/overlay/overlay.js"),
    ),
];

/// Resolves `nova://` request paths to bytes and a MIME type.
///
/// Lookup order: the filesystem base directory (if any), then in-memory
/// assets (bundled page plus anything added with `add_override`).
pub struct ContentProvider {
    base_dir: Option<PathBuf>,
    overrides: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    /// A provider serving only the bundled overlay page.
    pub fn bundled() -> Self {
        let mut provider = Self {
            base_dir: None,
            overrides: HashMap::new(),
        };
        for (path, mime, data) in BUNDLED_ASSETS {
            provider.add_override(*path, *mime, data.as_bytes());
        }
        provider
    }

    /// Serve files from `base_dir` first, falling back to the bundled page.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Register an in-memory asset.
    pub fn add_override(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        self.overrides
            .insert(path.into(), (mime.into(), data.into()));
    }

    /// Resolve a request path to content bytes and MIME type.
    pub fn resolve(&self, path: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let clean = path.trim_start_matches('/');

        if let Some(found) = self.resolve_file(clean) {
            return Some(found);
        }

        self.overrides
            .get(clean)
            .map(|(mime, data)| (Cow::Borrowed(mime.as_str()), Cow::Borrowed(data.as_slice())))
    }

    fn resolve_file(&self, clean: &str) -> Option<(Cow<'_, str>, Cow<'_, [u8]>)> {
        let base_dir = self.base_dir.as_ref()?;
        let file_path = base_dir.join(clean);

        // Prevent directory traversal (including symlink bypass).
        let canonical_base = std::fs::canonicalize(base_dir).ok()?;
        let canonical_file = std::fs::canonicalize(&file_path).ok()?;
        if !canonical_file.starts_with(&canonical_base) || !canonical_file.is_file() {
            return None;
        }

        let data = std::fs::read(&canonical_file).ok()?;
        let mime = mime_from_extension(&file_path);
        Some((Cow::Borrowed(mime), Cow::Owned(data)))
    }
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}
