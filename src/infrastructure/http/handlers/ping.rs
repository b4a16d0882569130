//! Ping Handler
//!
//! Health check endpoint

use axum::Json;

use crate::infrastructure::http::dto::PingResponse;

/// Ping endpoint - 健康检查
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
