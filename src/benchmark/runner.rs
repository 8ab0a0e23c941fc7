//! Benchmark runner
//!
//! Owns the full lifecycle of one run: build and pre-populate the set,
//! generate the workload, wrap the set in the configured policy, drive the
//! timed concurrent phase, and merge worker tallies into a summary. Each
//! runner is self-contained, so multiple runs can execute in one process
//! without touching any shared state.

use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::counters::QuotaCounters;
use super::partition::partition;
use super::worker::{self, WorkerResult};
use crate::config::{BenchmarkConfig, Distribution};
use crate::set::OrderedIntSet;
use crate::sync::SharedSet;
use crate::utils::{BenchTimer, BenchmarkError, Result};
use crate::workload::{random_key, Operation};

/// Stride between per-worker RNG seeds (the SplitMix64 golden-ratio
/// increment).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Merged outcome of one benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Wall-clock seconds spent in the concurrent phase (spawn to last join).
    pub elapsed_secs: f64,
    /// Operations per second over the concurrent phase.
    pub throughput: f64,
    pub ops_applied: u64,
    pub member_hits: u64,
    pub inserts_succeeded: u64,
    pub deletes_succeeded: u64,
    /// Set size after the untimed pre-population phase.
    pub initial_size: u64,
    /// Set size after all workers joined.
    pub final_size: u64,
}

/// Executes one benchmark run from a validated configuration.
pub struct BenchmarkRunner {
    config: BenchmarkConfig,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Run the benchmark and return the merged summary.
    pub fn run(&self) -> Result<RunSummary> {
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        // Untimed pre-phase: populate single-threaded, under no lock.
        let mut set = OrderedIntSet::new();
        populate(&mut set, self.config.initial_nodes, &mut rng);
        let initial_size = set.len() as u64;
        info!("initial set size: {}", initial_size);

        let spec = self.config.workload_spec();
        let counts = spec.counts();
        info!(
            "operation counts: member={} insert={} delete={}",
            counts.member, counts.insert, counts.delete
        );

        let ops = spec.generate(&mut rng);
        let shared = SharedSet::new(self.config.policy, set);

        let (elapsed_secs, merged) = match self.config.distribution {
            Distribution::Partition => self.run_partitioned(&shared, &ops)?,
            Distribution::Quota => self.run_quota(&shared, QuotaCounters::from_counts(counts))?,
        };

        let final_set = shared.into_inner();
        let final_size = final_set.len() as u64;
        debug_assert!(chain_is_sorted_unique(&final_set));

        let throughput = if elapsed_secs > 0.0 {
            merged.ops_applied as f64 / elapsed_secs
        } else {
            0.0
        };
        info!(
            "final set size: {} ({} inserts, {} deletes succeeded)",
            final_size, merged.inserts_succeeded, merged.deletes_succeeded
        );

        Ok(RunSummary {
            elapsed_secs,
            throughput,
            ops_applied: merged.ops_applied,
            member_hits: merged.member_hits,
            inserts_succeeded: merged.inserts_succeeded,
            deletes_succeeded: merged.deletes_succeeded,
            initial_size,
            final_size,
        })
    }

    /// Timed phase, static-partition strategy: each worker owns one
    /// contiguous slice of the read-only sequence.
    fn run_partitioned(
        &self,
        shared: &SharedSet,
        ops: &[Operation],
    ) -> Result<(f64, WorkerResult)> {
        let slices = partition(ops.len(), self.config.threads as usize);
        debug!("thread slices: {:?}", slices);

        let mut timer = BenchTimer::new();
        let mut merged = WorkerResult::default();

        let elapsed = thread::scope(|s| -> Result<f64> {
            timer.start();
            let mut handles = Vec::with_capacity(slices.len());
            for (worker_id, slice) in slices.iter().enumerate() {
                let ops = &ops[slice.start..slice.start + slice.count];
                handles.push(spawn_worker(s, worker_id, move || {
                    worker::run_partition(worker_id, shared, ops)
                })?);
            }
            for handle in handles {
                merged.merge(&join_worker(handle)?);
            }
            Ok(timer.stop())
        })?;

        Ok((elapsed, merged))
    }

    /// Timed phase, shared-quota strategy: workers contend on the atomic
    /// per-kind quotas and draw keys on the fly.
    fn run_quota(&self, shared: &SharedSet, quotas: QuotaCounters) -> Result<(f64, WorkerResult)> {
        let quotas = &quotas;
        let mut timer = BenchTimer::new();
        let mut merged = WorkerResult::default();

        let elapsed = thread::scope(|s| -> Result<f64> {
            timer.start();
            let mut handles = Vec::with_capacity(self.config.threads as usize);
            for worker_id in 0..self.config.threads as usize {
                let mut rng = StdRng::seed_from_u64(
                    self.config
                        .seed
                        .wrapping_add((worker_id as u64 + 1).wrapping_mul(SEED_STRIDE)),
                );
                handles.push(spawn_worker(s, worker_id, move || {
                    worker::run_quota(worker_id, shared, quotas, &mut rng)
                })?);
            }
            for handle in handles {
                merged.merge(&join_worker(handle)?);
            }
            Ok(timer.stop())
        })?;

        Ok((elapsed, merged))
    }
}

/// Insert `n` distinct uniformly random keys, redrawing on duplicates.
fn populate(set: &mut OrderedIntSet, n: u64, rng: &mut StdRng) {
    let mut inserted = 0;
    while inserted < n {
        if set.insert(random_key(rng)) {
            inserted += 1;
        }
    }
}

/// Spawn one named worker thread inside the scope.
fn spawn_worker<'scope, 'env, F>(
    s: &'scope thread::Scope<'scope, 'env>,
    worker_id: usize,
    work: F,
) -> Result<thread::ScopedJoinHandle<'scope, WorkerResult>>
where
    F: FnOnce() -> WorkerResult + Send + 'scope,
{
    thread::Builder::new()
        .name(format!("worker-{}", worker_id))
        .spawn_scoped(s, work)
        .map_err(|e| BenchmarkError::Worker(format!("failed to spawn worker: {}", e)))
}

fn join_worker(handle: thread::ScopedJoinHandle<'_, WorkerResult>) -> Result<WorkerResult> {
    handle
        .join()
        .map_err(|_| BenchmarkError::Worker("worker thread panicked".into()))
}

fn chain_is_sorted_unique(set: &OrderedIntSet) -> bool {
    let keys: Vec<u16> = set.iter().collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}
