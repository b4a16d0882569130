//! 应用层 - 用例编排
//!
//! 包含：
//! - commands: 求值命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;

// Re-exports
pub use commands::{
    to_json_number, ErrorBody, EvaluateCommand, RequestPayload, ResponseEnvelope, SuccessBody,
    // Handlers
    handlers::EvaluateHandler,
};

pub use error::{status, ApplicationError};
