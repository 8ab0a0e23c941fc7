//! Worker loops
//!
//! A worker applies operations to the shared set through the configured
//! policy and tallies outcomes locally; the runner merges the per-worker
//! tallies after all threads join. The two loops implement the two
//! work-distribution strategies:
//!
//! - `run_partition`: sequentially apply one pre-assigned contiguous slice
//!   of the read-only operation sequence.
//! - `run_quota`: repeatedly draw a random kind and a fresh random key,
//!   claim against the shared quotas, and apply on success. Draws against an
//!   exhausted quota are simply redrawn; that busy-poll is the documented
//!   cost of the finer load balancing.

use rand::rngs::StdRng;
use rand::Rng;

use super::counters::QuotaCounters;
use crate::sync::SharedSet;
use crate::workload::{random_key, OpKind, Operation};

/// Outcome tallies from one worker thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerResult {
    pub worker_id: usize,
    /// Operations applied through the policy.
    pub ops_applied: u64,
    /// Member lookups that found their key.
    pub member_hits: u64,
    /// Inserts that actually added a key.
    pub inserts_succeeded: u64,
    /// Deletes that actually removed a key.
    pub deletes_succeeded: u64,
}

impl WorkerResult {
    fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            ..Self::default()
        }
    }

    #[inline]
    fn record(&mut self, kind: OpKind, outcome: bool) {
        self.ops_applied += 1;
        if outcome {
            match kind {
                OpKind::Member => self.member_hits += 1,
                OpKind::Insert => self.inserts_succeeded += 1,
                OpKind::Delete => self.deletes_succeeded += 1,
            }
        }
    }

    /// Fold another worker's tallies into this one.
    pub fn merge(&mut self, other: &WorkerResult) {
        self.ops_applied += other.ops_applied;
        self.member_hits += other.member_hits;
        self.inserts_succeeded += other.inserts_succeeded;
        self.deletes_succeeded += other.deletes_succeeded;
    }
}

/// Apply one slice of the pre-generated sequence (static partition).
pub fn run_partition(worker_id: usize, set: &SharedSet, ops: &[Operation]) -> WorkerResult {
    let mut result = WorkerResult::new(worker_id);
    for &op in ops {
        let outcome = set.apply(op);
        result.record(op.kind, outcome);
    }
    result
}

/// Claim and apply work until the shared quotas are exhausted.
///
/// Keys are drawn fresh per claimed operation rather than taken from a
/// pre-generated sequence; the per-kind operation counts are still exact.
pub fn run_quota(
    worker_id: usize,
    set: &SharedSet,
    quotas: &QuotaCounters,
    rng: &mut StdRng,
) -> WorkerResult {
    let mut result = WorkerResult::new(worker_id);
    while !quotas.is_complete() {
        let kind = OpKind::ALL[rng.gen_range(0..OpKind::ALL.len())];
        if !quotas.claim(kind) {
            continue;
        }
        let op = Operation {
            kind,
            key: random_key(rng),
        };
        let outcome = set.apply(op);
        result.record(kind, outcome);
    }
    result
}
