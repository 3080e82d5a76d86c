//! Logging setup.
//!
//! Every outcome is reported twice: human-readable on stdout and timestamped
//! in an append-only log file that survives across runs. Both sinks are fmt
//! layers on one explicitly built registry, initialized once at startup and
//! living for the duration of the process.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Fixed relative path of the persistent log file. Never truncated.
pub const LOG_FILE: &str = "dns_management.log";

/// Initializes the global subscriber: stdout plus the append-only log file.
///
/// A log file that cannot be opened must not abort provisioning, so in that
/// case the subscriber falls back to stdout only and the failure is noted
/// there.
pub fn init(log_path: &Path) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "setdns_cli=info,setdns_client=info".into());

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let file = OpenOptions::new().create(true).append(true).open(log_path);
    match file {
        Ok(file) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .with(file_layer)
                .init();
        }
        Err(e) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(stdout_layer)
                .init();
            tracing::warn!(
                "could not open log file {}: {e}; logging to stdout only",
                log_path.display()
            );
        }
    }
}
