//! Configuration: CLI arguments and the validated benchmark config

pub mod benchmark_config;
pub mod cli;

pub use benchmark_config::BenchmarkConfig;
pub use cli::{CliArgs, Distribution, PolicyKind};
