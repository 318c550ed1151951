//! Liveness probe.

use axum::http::StatusCode;

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

/// `GET /healthz` — always 200 once the router is serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
