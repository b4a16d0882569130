//! Data Transfer Objects

use serde::{Deserialize, Serialize};

/// 网关事件
///
/// 仿照无服务器代理集成的事件格式，只关心 `body`，其余字段忽略
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayEvent {
    #[serde(default)]
    pub body: Option<String>,
}

/// Ping 响应
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}
