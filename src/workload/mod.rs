//! Workload definitions and the operation-sequence generator

pub mod generator;
pub mod operation;

pub use generator::{OpCounts, WorkloadSpec};
pub use operation::{random_key, OpKind, Operation, KEY_SPACE};
