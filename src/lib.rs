pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod records;

pub use engine::{compose_report, compose_report_from_raw};
pub use error::{HealthError, Result};
pub use models::{HealthInput, HealthReport, RawInput};
