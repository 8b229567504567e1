use crate::models::app::app_config::{AppConfig, DEFAULT_LOG_FILTER};
use chrono::Utc;
use log::warn;
use std::io;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Stamps log lines with the current UTC time.
pub struct UtcTimestamp;

impl FormatTime for UtcTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Utc::now().format(LOG_TIMESTAMP_FORMAT))
    }
}

/// Installs the global subscriber. Logs go to stderr; stdout belongs to the
/// form. Calling this more than once is a no-op.
pub fn init_logging(config: &AppConfig) {
    let (filter, rejected) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTimestamp)
        .with_writer(io::stderr)
        .try_init();

    if let Some(e) = rejected {
        warn!("Ignoring log filter {:?}: {}", config.log_filter, e);
    }
}
