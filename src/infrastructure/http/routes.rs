//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping        GET   健康检查
//! - /api/calculate   POST  原始请求体求值，状态码与响应体原样返回
//! - /api/invoke      POST  网关事件求值，返回 {statusCode, body} 信封

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/calculate", post(handlers::calculate))
        .route("/invoke", post(handlers::invoke))
}
