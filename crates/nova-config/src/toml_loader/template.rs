//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# NOVA overlay configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[overlay]
# tick_interval_ms = 50       # 10-1000
# completion_delay_ms = 200   # 0-5000

[callbacks]
# Used when the host does not inject CFX_NUI_RESOURCE.
# default_resource = "nova_core"
# scheme = "https"            # http | https
# timeout_ms = 10000          # 100-120000
# connect_timeout_ms = 5000   # 100-60000

[window]
# title = "NOVA"
# width = 480                 # 100-7680
# height = 120                # 40-4320
# transparent = true
# always_on_top = true
# decorations = false

[webview]
# devtools = false
# assets_dir = "/path/to/overlay"

[logging]
# level = "INFO"              # DEBUG | INFO | WARNING | ERROR
"##
    .to_string()
}
