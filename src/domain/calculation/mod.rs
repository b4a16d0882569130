//! Calculation Context - 四则运算限界上下文
//!
//! 职责:
//! - 运算符与操作数的值对象
//! - 运算分派与结果舍入

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{round_to_hundredths, Calculation};
pub use errors::CalculationError;
pub use value_objects::{Operand, Operator};
