use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::Operation;
use crate::services::Calculation;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CalculationRequest {
    /// First operand
    #[schema(example = 10.5)]
    pub number1: f64,
    /// Second operand
    #[schema(example = 5.2)]
    pub number2: f64,
    /// Arithmetic operation to perform
    pub operation: Operation,
}

/// Operands for the single-operation endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperandsQuery {
    /// First operand
    #[param(example = 10.5)]
    pub number1: f64,
    /// Second operand
    #[param(example = 5.2)]
    pub number2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    /// The calculation result
    #[schema(example = 15.7)]
    pub result: f64,
    /// Human-readable operation detail
    #[schema(example = "10.5 + 5.2")]
    pub detail: String,
    /// Type of operation performed
    #[schema(example = "add")]
    pub operation: String,
}

impl From<Calculation> for CalculationResponse {
    fn from(calc: Calculation) -> Self {
        Self {
            result: calc.result,
            detail: calc.detail,
            operation: calc.operation.as_str().to_string(),
        }
    }
}

fn check_finite(errors: &mut ValidationErrors, field: &'static str, value: f64) {
    if !value.is_finite() {
        let mut error = ValidationError::new("finite");
        error.message = Some(Cow::Borrowed("Operand must be a finite number"));
        errors.add(field, error);
    }
}

fn validate_operands(number1: f64, number2: f64) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_finite(&mut errors, "number1", number1);
    check_finite(&mut errors, "number2", number2);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Validate for CalculationRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_operands(self.number1, self.number2)
    }
}

impl Validate for OperandsQuery {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_operands(self.number1, self.number2)
    }
}
