//! Calculation Context - Calculation 聚合

use super::{CalculationError, Operand, Operator};

/// 2^52：绝对值达到此值的 f64 不再有小数位
const NO_FRACTION_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// 舍入到百分位（四舍五入，远离零）
///
/// 无小数位可舍的大数原样返回，避免乘 100 时溢出
pub fn round_to_hundredths(value: f64) -> f64 {
    if value.abs() >= NO_FRACTION_THRESHOLD {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// 一次计算：两个操作数 + 一个运算符
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    x: Operand,
    y: Operand,
    operator: Operator,
}

impl Calculation {
    pub fn new(x: Operand, y: Operand, operator: Operator) -> Self {
        Self { x, y, operator }
    }

    pub fn x(&self) -> Operand {
        self.x
    }

    pub fn y(&self) -> Operand {
        self.y
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// 执行运算并舍入到两位小数
    ///
    /// 结果可能溢出为无穷，由调用方决定如何处理
    pub fn evaluate(&self) -> Result<f64, CalculationError> {
        let x = self.x.value();
        let y = self.y.value();

        let raw = match self.operator {
            Operator::Add => x + y,
            Operator::Subtract => x - y,
            Operator::Multiply => x * y,
            Operator::Divide => {
                if self.y.is_zero() {
                    return Err(CalculationError::ZeroDivision);
                }
                x / y
            }
        };

        Ok(round_to_hundredths(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(x: f64, y: f64, operator: Operator) -> Result<f64, CalculationError> {
        Calculation::new(Operand::new(x).unwrap(), Operand::new(y).unwrap(), operator).evaluate()
    }

    #[test]
    fn test_basic_operations() {
        assert_eq!(calc(1.0, 2.0, Operator::Add).unwrap(), 3.0);
        assert_eq!(calc(3.0, 2.0, Operator::Subtract).unwrap(), 1.0);
        assert_eq!(calc(2.0, 3.0, Operator::Multiply).unwrap(), 6.0);
        assert_eq!(calc(6.0, 3.0, Operator::Divide).unwrap(), 2.0);
    }

    #[test]
    fn test_division_rounds_to_two_decimals() {
        assert_eq!(calc(1.0, 3.0, Operator::Divide).unwrap(), 0.33);
        assert_eq!(calc(2.0, 3.0, Operator::Divide).unwrap(), 0.67);
        assert_eq!(calc(-1.0, 3.0, Operator::Divide).unwrap(), -0.33);
    }

    #[test]
    fn test_float_artifacts_removed() {
        assert_eq!(calc(0.1, 0.2, Operator::Add).unwrap(), 0.3);
    }

    #[test]
    fn test_zero_division() {
        assert_eq!(calc(1.0, 0.0, Operator::Divide), Err(CalculationError::ZeroDivision));
        assert_eq!(calc(0.0, 0.0, Operator::Divide), Err(CalculationError::ZeroDivision));
        assert_eq!(calc(5.0, -0.0, Operator::Divide), Err(CalculationError::ZeroDivision));
    }

    #[test]
    fn test_zero_operands_with_other_operators() {
        assert_eq!(calc(0.0, 5.0, Operator::Add).unwrap(), 5.0);
        assert_eq!(calc(5.0, 0.0, Operator::Subtract).unwrap(), 5.0);
        assert_eq!(calc(5.0, 0.0, Operator::Multiply).unwrap(), 0.0);
        assert_eq!(calc(0.0, 5.0, Operator::Divide).unwrap(), 0.0);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to_hundredths(0.125), 0.13);
        assert_eq!(round_to_hundredths(-0.125), -0.13);
        assert_eq!(round_to_hundredths(2.0), 2.0);
    }

    #[test]
    fn test_large_values_not_rounded() {
        assert_eq!(round_to_hundredths(1e307), 1e307);
        assert_eq!(round_to_hundredths(-f64::MAX), -f64::MAX);
        assert_eq!(calc(1e307, 0.0, Operator::Add).unwrap(), 1e307);
        assert_eq!(calc(f64::MAX, 1.0, Operator::Divide).unwrap(), f64::MAX);
    }

    #[test]
    fn test_overflow_is_not_finite() {
        let result = calc(f64::MAX, 10.0, Operator::Multiply).unwrap();
        assert!(result.is_infinite());
    }
}
