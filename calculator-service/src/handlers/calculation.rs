use service_core::{axum::Json, error::AppError};

use crate::{
    dtos::{CalculationRequest, CalculationResponse, ErrorResponse, OperandsQuery},
    models::Operation,
    services,
    utils::{ValidatedJson, ValidatedQuery},
};

/// Runs one operation and records its outcome.
fn respond(
    number1: f64,
    number2: f64,
    operation: Operation,
) -> Result<Json<CalculationResponse>, AppError> {
    match services::calculate(number1, number2, operation) {
        Ok(calc) => {
            services::record_calculation(operation.as_str(), "ok");
            Ok(Json(calc.into()))
        }
        Err(e) => {
            services::record_calculation(operation.as_str(), "error");
            tracing::warn!(operation = %operation, error = %e, "Calculation rejected");
            Err(e.into())
        }
    }
}

/// Perform arithmetic calculation
///
/// Supports add (+), subtract (-), multiply (*) and divide (/).
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Successful calculation", body = CalculationResponse),
        (status = 400, description = "Invalid input or operation", body = ErrorResponse)
    ),
    tag = "calculations"
)]
pub async fn calculate(
    ValidatedJson(req): ValidatedJson<CalculationRequest>,
) -> Result<Json<CalculationResponse>, AppError> {
    respond(req.number1, req.number2, req.operation)
}

/// Add two numbers
#[utoipa::path(
    get,
    path = "/add",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Sum of the operands", body = CalculationResponse),
        (status = 400, description = "Malformed or missing operand", body = ErrorResponse)
    ),
    tag = "calculations"
)]
pub async fn add(
    ValidatedQuery(q): ValidatedQuery<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    respond(q.number1, q.number2, Operation::Add)
}

/// Subtract the second number from the first
#[utoipa::path(
    get,
    path = "/subtract",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Difference of the operands", body = CalculationResponse),
        (status = 400, description = "Malformed or missing operand", body = ErrorResponse)
    ),
    tag = "calculations"
)]
pub async fn subtract(
    ValidatedQuery(q): ValidatedQuery<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    respond(q.number1, q.number2, Operation::Subtract)
}

/// Multiply two numbers
#[utoipa::path(
    get,
    path = "/multiply",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Product of the operands", body = CalculationResponse),
        (status = 400, description = "Malformed or missing operand", body = ErrorResponse)
    ),
    tag = "calculations"
)]
pub async fn multiply(
    ValidatedQuery(q): ValidatedQuery<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    respond(q.number1, q.number2, Operation::Multiply)
}

/// Divide the first number by the second
#[utoipa::path(
    get,
    path = "/divide",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Successful division", body = CalculationResponse),
        (status = 400, description = "Division by zero attempted", body = ErrorResponse)
    ),
    tag = "calculations"
)]
pub async fn divide(
    ValidatedQuery(q): ValidatedQuery<OperandsQuery>,
) -> Result<Json<CalculationResponse>, AppError> {
    respond(q.number1, q.number2, Operation::Divide)
}
