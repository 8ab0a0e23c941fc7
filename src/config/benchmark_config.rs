//! Benchmark configuration derived from CLI arguments

use super::cli::{CliArgs, Distribution, PolicyKind};
use crate::utils::{BenchmarkError, Result};
use crate::workload::{WorkloadSpec, KEY_SPACE};

/// Upper bound on worker threads.
pub const MAX_THREADS: u32 = 8;

/// Slack allowed when checking that the fractions sum to at most 1.
const FRACTION_EPSILON: f64 = 1e-6;

/// Complete, validated benchmark configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    // Parallelism
    pub threads: u32,
    pub policy: PolicyKind,
    pub distribution: Distribution,

    // Workload
    pub initial_nodes: u64,
    pub total_operations: u64,
    pub member_frac: f64,
    pub insert_frac: f64,
    pub delete_frac: f64,

    // Reproducibility
    pub seed: u64,

    // Output
    pub quiet: bool,
    pub verbose: bool,
}

impl BenchmarkConfig {
    /// Validate CLI arguments and build the run configuration.
    ///
    /// A seed of 0 is replaced with an entropy-derived one so every
    /// unseeded run uses a fresh random stream; the resolved seed is kept
    /// in the config so diagnostics can report it for reproduction.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        if args.num_threads < 1 || args.num_threads > MAX_THREADS {
            return Err(BenchmarkError::Config(format!(
                "number of threads must be between 1 and {}, got {}",
                MAX_THREADS, args.num_threads
            )));
        }

        if args.policy == PolicyKind::Serial && args.num_threads != 1 {
            return Err(BenchmarkError::Config(format!(
                "serial policy performs no locking and requires exactly 1 thread, got {}",
                args.num_threads
            )));
        }

        for (name, frac) in [
            ("member_frac", args.member_frac),
            ("insert_frac", args.insert_frac),
            ("delete_frac", args.delete_frac),
        ] {
            if !frac.is_finite() || !(0.0..=1.0).contains(&frac) {
                return Err(BenchmarkError::Config(format!(
                    "{} must be in [0, 1], got {}",
                    name, frac
                )));
            }
        }

        let frac_sum = args.member_frac + args.insert_frac + args.delete_frac;
        if frac_sum > 1.0 + FRACTION_EPSILON {
            return Err(BenchmarkError::Config(format!(
                "operation fractions must sum to at most 1, got {}",
                frac_sum
            )));
        }

        if args.initial_nodes > KEY_SPACE as u64 {
            return Err(BenchmarkError::Config(format!(
                "initial set size cannot exceed the {} distinct keys in the key space, got {}",
                KEY_SPACE, args.initial_nodes
            )));
        }

        let seed = if args.seed == 0 {
            rand::random()
        } else {
            args.seed
        };

        Ok(Self {
            threads: args.num_threads,
            policy: args.policy,
            distribution: args.distribution,
            initial_nodes: args.initial_nodes,
            total_operations: args.total_operations,
            member_frac: args.member_frac,
            insert_frac: args.insert_frac,
            delete_frac: args.delete_frac,
            seed,
            quiet: args.quiet,
            verbose: args.verbose,
        })
    }

    /// Workload shape for this run.
    pub fn workload_spec(&self) -> WorkloadSpec {
        WorkloadSpec {
            total: self.total_operations as usize,
            member_frac: self.member_frac,
            insert_frac: self.insert_frac,
            delete_frac: self.delete_frac,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            num_threads: 4,
            initial_nodes: 1_000,
            total_operations: 10_000,
            member_frac: 0.9,
            insert_frac: 0.05,
            delete_frac: 0.05,
            policy: PolicyKind::Mutex,
            distribution: Distribution::Partition,
            seed: 42,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn accepts_valid_arguments() {
        let config = BenchmarkConfig::from_cli(&args()).expect("valid config");
        assert_eq!(config.threads, 4);
        assert_eq!(config.seed, 42);
        assert_eq!(config.workload_spec().total, 10_000);
    }

    #[test]
    fn rejects_thread_count_out_of_bounds() {
        let mut zero = args();
        zero.num_threads = 0;
        assert!(BenchmarkConfig::from_cli(&zero).is_err());

        let mut nine = args();
        nine.num_threads = 9;
        assert!(BenchmarkConfig::from_cli(&nine).is_err());
    }

    #[test]
    fn serial_policy_requires_single_thread() {
        let mut bad = args();
        bad.policy = PolicyKind::Serial;
        assert!(BenchmarkConfig::from_cli(&bad).is_err());

        bad.num_threads = 1;
        assert!(BenchmarkConfig::from_cli(&bad).is_ok());
    }

    #[test]
    fn rejects_fraction_out_of_range() {
        let mut bad = args();
        bad.member_frac = -0.1;
        assert!(BenchmarkConfig::from_cli(&bad).is_err());

        let mut bad = args();
        bad.insert_frac = 1.5;
        assert!(BenchmarkConfig::from_cli(&bad).is_err());
    }

    #[test]
    fn rejects_fractions_summing_past_one() {
        let mut bad = args();
        bad.member_frac = 0.9;
        bad.insert_frac = 0.2;
        assert!(BenchmarkConfig::from_cli(&bad).is_err());
    }

    #[test]
    fn rejects_initial_size_beyond_key_space() {
        let mut bad = args();
        bad.initial_nodes = 70_000;
        assert!(BenchmarkConfig::from_cli(&bad).is_err());
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut unseeded = args();
        unseeded.seed = 0;
        let config = BenchmarkConfig::from_cli(&unseeded).expect("valid config");
        assert_ne!(config.seed, 0);
    }
}
