//! greeter - a minimal HTTP greeting service.
//!
//! One greeting route, one liveness route, an explicit route table, and an
//! event sink injected through application state for the greeting's audit
//! record. The library crate exposes the building blocks so integration
//! tests can assemble the service in-process.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
