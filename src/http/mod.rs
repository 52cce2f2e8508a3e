//! HTTP server module.
//!
//! Binds the configured address, serves the route table, and drains
//! in-flight connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, ServerError};
