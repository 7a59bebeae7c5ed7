//! Logging setup for the fhr binary
//!
//! Progress and debug events go through `tracing`; this installs a stderr
//! subscriber whose level follows `-q`/`-v` unless `RUST_LOG` is set.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Log level for the given verbosity flags
pub fn level_for(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Builds the filter, letting `RUST_LOG` take precedence
pub fn env_filter(verbosity: u8, quiet: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fhr={}", level_for(verbosity, quiet))))
}

/// Initialize the global subscriber
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(
    verbosity: u8,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity, quiet))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbosity > 1)
        .without_time()
        .compact()
        .try_init()
}
