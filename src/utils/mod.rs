//! Shared utilities: error types and the benchmark timer

pub mod error;
pub mod timing;

pub use error::{BenchmarkError, Result};
pub use timing::BenchTimer;
