//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Calculation Context: 两个操作数的四则运算

pub mod calculation;

pub use calculation::{Calculation, CalculationError, Operand, Operator};
