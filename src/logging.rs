//! Logging initialization.
//!
//! Logs go to stderr so tool output on stdout stays pipeable. The
//! `TOOLSHED_LOG` environment variable takes precedence over the verbosity
//! flag and accepts any `tracing_subscriber` filter directive.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the verbosity flag.
pub const LOG_ENV: &str = "TOOLSHED_LOG";

/// Maps a verbosity count to a tracing directive string.
///
/// - 0 → `"warn"`
/// - 1 → `"info"`
/// - 2 → `"debug"`
/// - 3+ → `"trace"`
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes the global tracing subscriber.
///
/// Uses `try_init()`, so repeated calls are ignored.
///
/// # Arguments
///
/// * `verbosity`: Count of `-v` flags
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_mapping() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(1), "info");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(3), "trace");
        assert_eq!(verbosity_to_directive(u8::MAX), "trace");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(0);
        init_logging(3);
    }
}
