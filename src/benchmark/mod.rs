//! Benchmark execution: work distribution, worker loops, and the runner

pub mod counters;
pub mod partition;
pub mod runner;
pub mod worker;

pub use counters::QuotaCounters;
pub use partition::{partition, ThreadSlice};
pub use runner::{BenchmarkRunner, RunSummary};
pub use worker::WorkerResult;
