//! Calculator - 两个操作数的四则运算求值服务
//!
//! 架构设计: DDD + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Calculation Context: 运算符、操作数、运算分派与舍入
//!
//! 应用层 (application/):
//! - Commands: 求值命令与 EvaluateHandler（校验流水线 + 响应信封）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 宿主传输，原样转发响应信封

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{EvaluateCommand, EvaluateHandler, ResponseEnvelope};
pub use config::{load_config, AppConfig};
