//! Logging setup for hosts embedding hudfmt
//!
//! The library only emits `tracing` events. Hosts that do not install their
//! own subscriber can call [`init_logging`] once at startup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `hudfmt_utils=trace`)
pub const LOG_ENV_VAR: &str = "HUDFMT_LOG";

/// Filter used when neither `RUST_LOG` nor `HUDFMT_LOG` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolve the active filter directive
pub fn log_directive() -> String {
    std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

/// Install a fmt subscriber filtered by `RUST_LOG`, then `HUDFMT_LOG`.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let log_level = log_directive();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .try_init()
        .is_ok()
}
