//! Request-span middleware for correlating logs with requests.
//!
//! Each incoming request gets a UUID v4 and an info span wrapping its whole
//! lifecycle, so every log record emitted while the request is handled
//! carries the request_id field. Completion is logged with status code and
//! duration.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that wraps each request in a span carrying a request ID.
///
/// Layered outermost so the span covers all other middleware and handlers.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
        response
    }
    .instrument(span)
    .await
}
