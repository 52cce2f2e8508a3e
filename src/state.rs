//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::logging::EventSink;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the event sink capability
/// handlers record through. The sink is injected here at construction,
/// never resolved from global state inside a handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub events: Arc<dyn EventSink>,
}

impl AppState {
    /// Creates a new application state from the given configuration and sink.
    pub fn new(config: AppConfig, events: Arc<dyn EventSink>) -> Self {
        Self {
            config: Arc::new(config),
            events,
        }
    }
}
