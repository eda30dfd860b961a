//! Pure arithmetic core: one binary operation per call, no side effects.

use crate::models::Operation;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    NonFiniteResult,
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        AppError::BadRequest(anyhow::Error::new(err))
    }
}

/// Outcome of a single operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub result: f64,
    pub detail: String,
    pub operation: Operation,
}

/// Renders an operand the way it appears in `detail`: whole numbers keep a
/// trailing `.0` (`20` becomes `"20.0"`) and exponents carry a sign and at
/// least two digits (`1e16` becomes `"1e+16"`, `1e-5` becomes `"1e-05"`).
pub fn format_operand(value: f64) -> String {
    let repr = format!("{:?}", value);

    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

pub fn calculate(
    number1: f64,
    number2: f64,
    operation: Operation,
) -> Result<Calculation, CalculationError> {
    let result = match operation {
        Operation::Add => number1 + number2,
        Operation::Subtract => number1 - number2,
        Operation::Multiply => number1 * number2,
        Operation::Divide => {
            if number2 == 0.0 {
                return Err(CalculationError::DivisionByZero);
            }
            number1 / number2
        }
    };

    if !result.is_finite() {
        return Err(CalculationError::NonFiniteResult);
    }

    Ok(Calculation {
        result,
        detail: format!(
            "{} {} {}",
            format_operand(number1),
            operation.symbol(),
            format_operand(number2)
        ),
        operation,
    })
}
