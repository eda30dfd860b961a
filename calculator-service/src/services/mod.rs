pub mod calculator;
pub mod metrics;

pub use self::calculator::{calculate, format_operand, Calculation, CalculationError};
pub use self::metrics::{get_metrics, init_metrics, record_calculation};
