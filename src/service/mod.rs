//! Business logic between the CLIs and the stores.

pub mod calculator;
pub mod task_service;

pub use calculator::CalculatorService;
pub use task_service::TaskService;
