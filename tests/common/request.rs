#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Send a request with the given method and collect the raw response.
pub async fn request_raw(app: &Router, method: Method, path: &str) -> (u16, String) {
    let (status, _headers, body) = request_full(app, method, path).await;
    (status, body)
}

/// Helper for GET requests returning raw string body.
pub async fn get_raw(app: &Router, path: &str) -> (u16, String) {
    request_raw(app, Method::GET, path).await
}

/// Helper for GET requests that also returns the response headers.
pub async fn get_with_headers(app: &Router, path: &str) -> (u16, HeaderMap, String) {
    request_full(app, Method::GET, path).await
}

async fn request_full(app: &Router, method: Method, path: &str) -> (u16, HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status().as_u16();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body_str = String::from_utf8_lossy(&body_bytes).to_string();

    (status, headers, body_str)
}
