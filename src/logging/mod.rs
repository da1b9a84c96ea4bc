//! Structured logging setup using tracing
//!
//! Console logging with env-filter support. The crate itself only emits
//! `tracing` events; calling [`init_logging`] is optional and intended
//! for binaries and test harnesses that want to see them.
//!
//! # Example
//!
//! ```no_run
//! use scrip::logging::init_logging;
//!
//! init_logging("debug").expect("Failed to initialize logging");
//! ```

use crate::domain::errors::ScripError;
use crate::domain::result::Result;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Initialize console logging
///
/// The `RUST_LOG` environment variable takes precedence over the
/// supplied level. Call at most once per process.
///
/// # Arguments
///
/// * `log_level` - Log level as a string (trace, debug, info, warn, error)
///
/// # Example
///
/// ```no_run
/// use scrip::logging::init_logging;
///
/// init_logging("info").expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: &str) -> Result<()> {
    let level = parse_log_level(log_level)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scrip={}", level)));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();

    tracing::info!(level = %level, "Logging initialized");

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(ScripError::Validation(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
