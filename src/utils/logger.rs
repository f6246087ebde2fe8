/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Parses a log level name, falling back to `INFO` for unknown values
#[must_use]
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "WARN" | "WARNING" => Level::WARN,
        "ERROR" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Installs the global `tracing` subscriber
///
/// The level comes from `LOGLEVEL` (default `INFO`). Calling this more than once is harmless;
/// only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var(LOG_LEVEL_ENV)
            .map(|v| parse_log_level(&v))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            // another subscriber was installed by the host application
            return;
        }
        tracing::debug!("Log level set to: {}", level);
    });
}
