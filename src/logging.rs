//! Event sink capability and tracing bootstrap.
//!
//! Handlers do not log through a global logger. They receive an [`EventSink`]
//! at construction, via application state, and record events against that
//! narrow interface. The production sink forwards to the `tracing`
//! subscriber installed by [`init`]; tests substitute their own sinks.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig, SERVICE_NAME};

/// Severity of a recorded event, mirroring conventional log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

/// Narrow logging capability injected into request handlers.
///
/// Recording is fire-and-forget: the call returns nothing and must not
/// block. Implementations that can fail internally swallow the failure;
/// a sink problem is never allowed to surface to the caller.
pub trait EventSink: Send + Sync {
    /// Record one event at the given severity.
    fn record(&self, severity: Severity, message: &str);
}

/// Production sink forwarding events to the `tracing` subscriber.
///
/// Every record carries the service name, matching the fields on the
/// ambient request logs.
#[derive(Debug, Default, Clone)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(service = %SERVICE_NAME, "{}", message),
            Severity::Info => tracing::info!(service = %SERVICE_NAME, "{}", message),
            Severity::Warn => tracing::warn!(service = %SERVICE_NAME, "{}", message),
            Severity::Error => tracing::error!(service = %SERVICE_NAME, "{}", message),
        }
    }
}

/// Install the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string; the output format comes
/// from the logging section of the configuration.
pub fn init(config: &LoggingConfig, filter: &str) {
    let filter = EnvFilter::new(filter);

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer())
                .init();
        }
    }

    tracing::info!(
        service = %SERVICE_NAME,
        format = ?config.format,
        "Logging initialized"
    );
}
