//! Evaluate Commands - 求值命令与响应信封

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::application::error::{status, ApplicationError};

/// 求值命令
///
/// `body` 为原始请求体文本，可能缺失
#[derive(Debug, Clone, Default)]
pub struct EvaluateCommand {
    pub body: Option<String>,
}

impl EvaluateCommand {
    pub fn new(body: Option<String>) -> Self {
        Self { body }
    }
}

/// 请求载荷
///
/// 三个字段均可缺失且类型未定，由求值流程逐级校验
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestPayload {
    #[serde(default)]
    pub x: Option<Value>,
    #[serde(default)]
    pub y: Option<Value>,
    #[serde(default)]
    pub operator: Option<Value>,
}

/// 成功响应体
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub result: Number,
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

const FALLBACK_ERROR_BODY: &str = r#"{"message":"Some error happened"}"#;

/// 响应信封：状态码 + JSON 文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

impl ResponseEnvelope {
    /// 成功响应
    ///
    /// 结果无法表示为 JSON 数字（如溢出为无穷）时返回 Unknown 错误
    pub fn success(result: f64) -> Result<Self, ApplicationError> {
        let result = to_json_number(result)
            .ok_or_else(|| ApplicationError::internal(format!("result {} is not representable in JSON", result)))?;
        let body = serde_json::to_string(&SuccessBody { result })
            .map_err(|e| ApplicationError::internal(e.to_string()))?;

        Ok(Self {
            status_code: status::OK,
            body,
        })
    }

    /// 错误响应
    pub fn error(err: &ApplicationError) -> Self {
        let body = serde_json::to_string(&ErrorBody {
            message: err.to_string(),
        })
        .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string());

        Self {
            status_code: err.status_code(),
            body,
        }
    }
}

/// JavaScript 安全整数上限 (2^53 - 1)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// 转换为 JSON 数字
///
/// 整数值输出为整数（`3` 而非 `3.0`，`-0` 输出为 `0`），其它值使用最短往返表示
pub fn to_json_number(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}
