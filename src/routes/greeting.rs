//! The greeting endpoint.
//!
//! Responds to `GET /hello` with a fixed plain-text body, recording one
//! informational event through the injected sink per invocation.

use std::panic::{catch_unwind, AssertUnwindSafe};

use axum::extract::State;
use tracing::instrument;

use crate::config::{GREETING_BODY, GREETING_EVENT};
use crate::logging::Severity;
use crate::state::AppState;

/// Greeting handler.
///
/// The event record is a side channel: it is emitted before the response
/// is built and cannot alter it. A sink that panics is contained here, so
/// the client still receives the greeting.
#[instrument(name = "greeting::greeting", skip(state))]
pub async fn greeting(State(state): State<AppState>) -> &'static str {
    let recorded = catch_unwind(AssertUnwindSafe(|| {
        state.events.record(Severity::Info, GREETING_EVENT);
    }));
    if recorded.is_err() {
        tracing::warn!("Event sink panicked; greeting served without its record");
    }

    GREETING_BODY
}
