//! Liveness probe endpoint.
//!
//! Answers 200 whenever the process can serve HTTP. Used by load balancers
//! and orchestration probes; does no work and records nothing through the
//! event sink.

use crate::config::HEALTH_BODY;

/// Liveness handler.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
