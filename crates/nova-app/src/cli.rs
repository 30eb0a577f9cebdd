use clap::Parser;

/// NOVA in-game overlay: a progress bar driven by host messages.
///
/// Host messages are read from stdin as newline-delimited JSON.
#[derive(Parser, Debug)]
#[command(name = "nova-ui", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Parent resource receiving callbacks (overrides CFX_NUI_RESOURCE).
    #[arg(long)]
    pub resource: Option<String>,

    /// Run without a window, logging what the overlay would show.
    #[arg(long)]
    pub headless: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_windowed() {
        let args = Args::try_parse_from(["nova-ui"]).unwrap();
        assert!(!args.headless);
        assert!(args.config.is_none());
        assert!(args.resource.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "nova-ui",
            "--config",
            "/tmp/nova.toml",
            "--log-level",
            "debug",
            "--resource",
            "nova_hud",
            "--headless",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/nova.toml"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.resource.as_deref(), Some("nova_hud"));
        assert!(args.headless);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(Args::try_parse_from(["nova-ui", "--fullscreen"]).is_err());
    }
}
