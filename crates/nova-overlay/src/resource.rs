//! Resolution of the host resource that receives callbacks.

/// Environment binding injected by the host with its resource name.
pub const RESOURCE_ENV: &str = "CFX_NUI_RESOURCE";

/// Used when neither the host nor the config names a resource.
pub const DEFAULT_RESOURCE: &str = "nova_core";

/// Resolve the parent resource name: explicit override, then the host
/// binding, then `fallback`. Empty values count as absent.
pub fn resolve_parent_resource(explicit: Option<&str>, fallback: &str) -> String {
    let injected = std::env::var(RESOURCE_ENV).ok();
    pick_resource(explicit, injected.as_deref(), fallback)
}

fn pick_resource(explicit: Option<&str>, injected: Option<&str>, fallback: &str) -> String {
    [explicit, injected, Some(fallback)]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(DEFAULT_RESOURCE)
        .to_string()
}
