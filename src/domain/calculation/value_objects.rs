//! Calculation Context - Value Objects

use std::str::FromStr;

use super::CalculationError;

/// 运算符
///
/// 封闭集合，外部字符串只在边界处通过 `FromStr` 转换一次（大小写不敏感）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
        }
    }
}

impl FromStr for Operator {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == upper)
            .ok_or_else(|| CalculationError::InvalidOperator(s.to_string()))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 操作数
///
/// 不变量: 值必须是有限数（非 NaN、非无穷）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand(f64);

impl Operand {
    pub fn new(value: f64) -> Result<Self, CalculationError> {
        if !value.is_finite() {
            return Err(CalculationError::InvalidOperand(value.to_string()));
        }
        Ok(Self(value))
    }

    /// 从文本解析操作数（允许首尾空白）
    pub fn parse(text: &str) -> Result<Self, CalculationError> {
        let value = text
            .trim()
            .parse::<f64>()
            .map_err(|_| CalculationError::InvalidOperand(text.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_is_case_insensitive() {
        assert_eq!("ADD".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("add".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("Add".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("divide".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("MuLtIpLy".parse::<Operator>().unwrap(), Operator::Multiply);
    }

    #[test]
    fn test_unknown_operator_rejected() {
        assert_eq!(
            "adds".parse::<Operator>(),
            Err(CalculationError::InvalidOperator("adds".to_string()))
        );
        assert!("".parse::<Operator>().is_err());
        assert!(" ADD".parse::<Operator>().is_err());
        assert!("+".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operand_rejects_non_finite() {
        assert!(Operand::new(f64::NAN).is_err());
        assert!(Operand::new(f64::INFINITY).is_err());
        assert!(Operand::new(f64::NEG_INFINITY).is_err());
        assert_eq!(Operand::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_operand_parse() {
        assert_eq!(Operand::parse("42").unwrap().value(), 42.0);
        assert_eq!(Operand::parse(" -2.5 ").unwrap().value(), -2.5);
        assert!(Operand::parse("one").is_err());
        assert!(Operand::parse("").is_err());
        // f64 解析接受 "NaN" / "inf"，需要被有限性检查拦下
        assert!(Operand::parse("NaN").is_err());
        assert!(Operand::parse("inf").is_err());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert!(Operand::new(-0.0).unwrap().is_zero());
    }
}
