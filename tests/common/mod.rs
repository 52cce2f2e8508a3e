#![allow(dead_code, unused_imports)]

mod request;
mod sinks;

pub use request::*;
pub use sinks::*;

use std::sync::Arc;

use axum::Router;
use greeter::config::{AppConfig, HttpServerConfig, LoggingConfig};
use greeter::logging::EventSink;
use greeter::routes::create_router;
use greeter::state::AppState;

/// Build the real router around the given event sink.
pub fn test_router(events: Arc<dyn EventSink>) -> Router {
    let config = AppConfig {
        http: HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: LoggingConfig::default(),
    };
    create_router(AppState::new(config, events))
}
