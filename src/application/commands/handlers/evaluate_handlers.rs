//! Evaluate Command Handler
//!
//! 校验顺序（任一阶段失败立即返回 400）：
//! 1. 请求体存在且字段完整 -> INVALID_BODY
//! 2. 操作数为有效数字 -> INVALID_OPERANDS
//! 3. 运算符合法 -> INVALID_OPERATOR
//! 4. DIVIDE 时 y != 0 -> ZERO_DIVISION

use serde_json::Value;

use crate::application::commands::evaluate_commands::*;
use crate::application::error::ApplicationError;
use crate::domain::calculation::{Calculation, Operand, Operator};

/// Evaluate Handler - 对请求体求值
///
/// 无状态，可在并发请求间共享
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateHandler;

impl EvaluateHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EvaluateCommand) -> ResponseEnvelope {
        let outcome = self
            .evaluate(cmd.body.as_deref())
            .and_then(ResponseEnvelope::success);

        match outcome {
            Ok(envelope) => envelope,
            Err(err) => {
                if let ApplicationError::Unknown(cause) = &err {
                    tracing::error!(kind = err.kind(), cause = %cause, "Failed to build response");
                } else {
                    tracing::debug!(kind = err.kind(), "Request rejected");
                }
                ResponseEnvelope::error(&err)
            }
        }
    }

    /// 校验并计算，返回舍入后的结果
    pub fn evaluate(&self, body: Option<&str>) -> Result<f64, ApplicationError> {
        let payload = parse_payload(body)?;

        let (x, y, operator) = match (payload.x, payload.y, payload.operator) {
            (Some(x), Some(y), Some(operator))
                if is_present(&x) && is_present(&y) && is_present(&operator) =>
            {
                (x, y, operator)
            }
            _ => return Err(ApplicationError::InvalidBody),
        };

        let x = parse_operand(&x)?;
        let y = parse_operand(&y)?;
        let operator = parse_operator(&operator)?;

        let calculation = Calculation::new(x, y, operator);
        tracing::debug!(
            x = %calculation.x(),
            y = %calculation.y(),
            operator = %calculation.operator(),
            "Evaluating calculation"
        );

        Ok(calculation.evaluate()?)
    }
}

/// 解析请求体，只接受 JSON 对象
fn parse_payload(body: Option<&str>) -> Result<RequestPayload, ApplicationError> {
    let body = body
        .filter(|b| !b.is_empty())
        .ok_or(ApplicationError::InvalidBody)?;

    let value: Value = serde_json::from_str(body).map_err(|_| ApplicationError::InvalidBody)?;
    if !value.is_object() {
        return Err(ApplicationError::InvalidBody);
    }

    serde_json::from_value(value).map_err(|_| ApplicationError::InvalidBody)
}

/// 字段存在：非 null 且文本表示非空（数字 0 视为存在）
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn parse_operand(value: &Value) -> Result<Operand, ApplicationError> {
    let operand = match value {
        // 超出 f64 范围的字面量（如 1e400）在此得到 None
        Value::Number(n) => {
            let n = n.as_f64().ok_or(ApplicationError::InvalidOperands)?;
            Operand::new(n)?
        }
        Value::String(s) => Operand::parse(s)?,
        _ => return Err(ApplicationError::InvalidOperands),
    };
    Ok(operand)
}

fn parse_operator(value: &Value) -> Result<Operator, ApplicationError> {
    match value {
        Value::String(s) => Ok(s.parse::<Operator>()?),
        _ => Err(ApplicationError::InvalidOperator),
    }
}
