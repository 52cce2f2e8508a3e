//! HTTP route table and handlers.
//!
//! The route table is built explicitly at startup: each (method, path) pair
//! is registered against its handler function and consulted by axum's
//! dispatcher. Unmatched paths fall through to a plain-text 404 handler.
//!
//! Every route opts out of shared caching. The greeting records an event
//! per invocation, and an intermediary cache answering for the origin
//! would skip that record.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID per incoming request, allowing correlation of all logs
//! within a request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use http::StatusCode;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, GREETING_PATH, HEALTH_PATH};
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the router with all routes, cache headers, and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(GREETING_PATH, get(greeting::greeting))
        .route(HEALTH_PATH, get(health::health))
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request span middleware - outermost so the span covers everything
        .layer(middleware::from_fn(request_span_layer))
}

/// Fallback handler for paths with no registered route.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}
