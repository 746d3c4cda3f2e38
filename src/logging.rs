/// Logging setup
///
/// Filter priority: RUST_LOG > --debug > config `log_level` > "info".
/// Output goes to stderr.
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Pick the filter directive according to the priority above
fn directive(env: Option<String>, debug_flag: bool, config_level: Option<&str>) -> String {
    if let Some(env) = env {
        env
    } else if debug_flag {
        "debug".to_string()
    } else {
        config_level.unwrap_or(DEFAULT_LOG_LEVEL).to_string()
    }
}

pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let directive = directive(std::env::var("RUST_LOG").ok(), debug_flag, config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(filter = %directive, "Logging initialised");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority() {
        assert_eq!(directive(Some("trace".into()), true, Some("warn")), "trace");
        assert_eq!(directive(None, true, Some("warn")), "debug");
        assert_eq!(directive(None, false, Some("warn")), "warn");
        assert_eq!(directive(None, false, None), "info");
    }
}
