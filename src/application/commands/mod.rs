//! 应用层 - 命令
//!
//! 单一命令：对一个请求体求值

mod evaluate_commands;

pub mod handlers;

pub use evaluate_commands::*;
