//! Command-line argument parsing
//!
//! The positional arguments mirror the classic invocation of this benchmark:
//!
//! ```text
//! ordset-bench <num_threads> <n_initial_nodes> <n_total_operations> \
//!              <member_frac> <insert_frac> <delete_frac>
//! ```
//!
//! Flags select the synchronization policy, the work-distribution strategy,
//! the RNG seed and the output verbosity.

use clap::{Parser, ValueEnum};

/// Benchmark synchronization strategies over a shared ordered integer set
#[derive(Parser, Debug, Clone)]
#[command(name = "ordset-bench")]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    // ===== Workload Shape =====
    /// Number of worker threads (1-8)
    pub num_threads: u32,

    /// Number of unique random keys preloaded into the set before timing
    pub initial_nodes: u64,

    /// Total number of operations in the generated workload
    pub total_operations: u64,

    /// Fraction of member (lookup) operations
    pub member_frac: f64,

    /// Fraction of insert operations
    pub insert_frac: f64,

    /// Fraction of delete operations
    pub delete_frac: f64,

    // ===== Run Options =====
    /// Synchronization policy guarding the shared set
    #[arg(long = "policy", value_enum, default_value_t = PolicyKind::Mutex)]
    pub policy: PolicyKind,

    /// Work-distribution strategy across worker threads
    #[arg(long = "distribution", value_enum, default_value_t = Distribution::Partition)]
    pub distribution: Distribution,

    /// Seed for random number generation (0 = entropy-derived)
    #[arg(long = "seed", default_value_t = 0)]
    pub seed: u64,

    // ===== Output Options =====
    /// Quiet mode (print only the elapsed time)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Synchronization policy variants
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyKind {
    /// No locking; valid only with a single worker thread
    Serial,
    /// One global exclusive lock around every operation
    #[default]
    Mutex,
    /// Global read-write lock: shared for lookups, exclusive for mutations
    Rwlock,
}

/// Work-distribution strategies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Static contiguous slices of the pre-generated sequence, one per thread
    #[default]
    Partition,
    /// Threads dynamically claim work from shared per-kind atomic quotas
    Quota,
}
