//! 应用层错误定义
//!
//! 错误的 Display 即返回给调用方的固定消息

use thiserror::Error;

use crate::domain::calculation::CalculationError;

/// 状态码定义
pub mod status {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const INTERNAL_ERROR: u16 = 500;
}

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// 请求体缺失、无法解析或缺少字段
    #[error("Invalid body on request")]
    InvalidBody,

    /// x 或 y 不是有效数字
    #[error("Invalid operands")]
    InvalidOperands,

    /// 运算符不在 ADD/SUBTRACT/MULTIPLY/DIVIDE 之中
    #[error("Invalid operator")]
    InvalidOperator,

    /// DIVIDE 且 y == 0
    #[error("Division by 0")]
    ZeroDivision,

    /// 构建成功响应时的意外错误，原因只记录日志
    #[error("Some error happened")]
    Unknown(String),
}

impl ApplicationError {
    /// 创建内部错误
    pub fn internal(cause: impl Into<String>) -> Self {
        Self::Unknown(cause.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::Unknown(_) => status::INTERNAL_ERROR,
            _ => status::BAD_REQUEST,
        }
    }

    /// 错误类别名（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidBody => "INVALID_BODY",
            Self::InvalidOperands => "INVALID_OPERANDS",
            Self::InvalidOperator => "INVALID_OPERATOR",
            Self::ZeroDivision => "ZERO_DIVISION",
            Self::Unknown(_) => "UNKNOWN_ERROR",
        }
    }
}

impl From<CalculationError> for ApplicationError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::InvalidOperand(_) => Self::InvalidOperands,
            CalculationError::InvalidOperator(_) => Self::InvalidOperator,
            CalculationError::ZeroDivision => Self::ZeroDivision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(ApplicationError::InvalidBody.to_string(), "Invalid body on request");
        assert_eq!(ApplicationError::InvalidOperands.to_string(), "Invalid operands");
        assert_eq!(ApplicationError::InvalidOperator.to_string(), "Invalid operator");
        assert_eq!(ApplicationError::ZeroDivision.to_string(), "Division by 0");
        assert_eq!(
            ApplicationError::internal("serializer exploded").to_string(),
            "Some error happened"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApplicationError::InvalidBody.status_code(), 400);
        assert_eq!(ApplicationError::ZeroDivision.status_code(), 400);
        assert_eq!(ApplicationError::internal("x").status_code(), 500);
    }

    #[test]
    fn test_from_calculation_error() {
        assert_eq!(
            ApplicationError::from(CalculationError::InvalidOperand("one".into())),
            ApplicationError::InvalidOperands
        );
        assert_eq!(
            ApplicationError::from(CalculationError::InvalidOperator("adds".into())),
            ApplicationError::InvalidOperator
        );
        assert_eq!(
            ApplicationError::from(CalculationError::ZeroDivision),
            ApplicationError::ZeroDivision
        );
    }
}
