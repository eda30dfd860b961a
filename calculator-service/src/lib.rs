pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use utoipa::OpenApi;

pub use startup::{build_router, Application};

/// Name reported by the health check.
pub const SERVICE_NAME: &str = "calculator-api";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "A simple calculator microservice with RESTful endpoints",
        version = "1.0.0"
    ),
    paths(
        handlers::health::health_check,
        handlers::calculation::calculate,
        handlers::calculation::add,
        handlers::calculation::subtract,
        handlers::calculation::multiply,
        handlers::calculation::divide,
    ),
    components(
        schemas(
            dtos::CalculationRequest,
            dtos::CalculationResponse,
            dtos::ErrorResponse,
            dtos::HealthResponse,
            models::Operation,
        )
    ),
    tags(
        (name = "calculations", description = "Arithmetic operations endpoints"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;
