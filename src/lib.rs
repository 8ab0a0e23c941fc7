//! ordset-bench library
//!
//! Benchmarks synchronization strategies (serial, global mutex, global
//! read-write lock) for concurrent access to one shared ordered integer set.

pub mod benchmark;
pub mod config;
pub mod set;
pub mod sync;
pub mod utils;
pub mod workload;
