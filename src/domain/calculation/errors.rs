//! Calculation Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("无效的操作数: {0}")]
    InvalidOperand(String),

    #[error("无效的运算符: {0}")]
    InvalidOperator(String),

    #[error("除数为 0")]
    ZeroDivision,
}
