//! HTTP handlers for calculator-service.

pub mod calculation;
pub mod health;
pub mod metrics;

use service_core::{
    axum::{response::IntoResponse, Json},
    error::AppError,
};
use utoipa::OpenApi;

pub use calculation::{add, calculate, divide, multiply, subtract};
pub use health::health_check;

pub async fn openapi_json() -> impl IntoResponse {
    Json(crate::ApiDoc::openapi())
}

pub async fn not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!("Not Found"))
}
