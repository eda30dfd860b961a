pub mod calculation;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use calculation::{CalculationRequest, CalculationResponse, OperandsQuery};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Cannot divide by zero")]
    pub detail: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "calculator-api")]
    pub service: String,
}
