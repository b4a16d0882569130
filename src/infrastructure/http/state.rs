//! Application State

use crate::application::EvaluateHandler;

/// 应用状态
///
/// 只包含无状态的处理器，跨请求共享不可变
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub evaluate_handler: EvaluateHandler,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            evaluate_handler: EvaluateHandler::new(),
        }
    }
}
