use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_LEVEL: &str = "info";

/// Initialize structured JSON logging on stderr
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Initialize logging with a fallback level; `RUST_LOG` still wins when set.
///
/// Output goes to stderr so command output on stdout stays machine-readable.
pub fn init_with_level(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(level))
        .with_writer(std::io::stderr)
        .json()
        .init();
}

/// Initialize logging for tests (plain format, captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn filter_or(level: &str) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(directives.as_deref(), level)
}

/// Empty or unparsable directives fall back to `level`
fn filter_from(directives: Option<&str>, level: &str) -> EnvFilter {
    directives
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};

    #[test]
    fn test_logging_init_test_is_idempotent() {
        init_test();
        init_test();
        debug!(api_base = "http://127.0.0.1:8000", "Test debug message");
        info!("Test info message");
        warn!("Test warning message");
    }

    #[test]
    fn test_filter_falls_back_to_level() {
        assert_eq!(filter_from(None, "warn").to_string(), "warn");
        assert_eq!(filter_from(Some(""), "warn").to_string(), "warn");
        assert_eq!(filter_from(Some("frs_config=notalevel"), "warn").to_string(), "warn");
    }

    #[test]
    fn test_filter_prefers_directives() {
        assert_eq!(
            filter_from(Some("frs_config=debug"), "warn").to_string(),
            "frs_config=debug"
        );
    }
}
