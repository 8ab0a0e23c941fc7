//! Shared atomic quotas for the dynamic work-distribution strategy
//!
//! These counters are the only synchronization between workers besides the
//! set's own lock. Claims use relaxed fetch_add with an undo on overshoot,
//! so under any interleaving the number of successful claims per operation
//! kind equals that kind's target exactly.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::workload::{OpCounts, OpKind};

/// Per-kind claim quotas plus a total, shared by all workers of one run.
pub struct QuotaCounters {
    member_issued: AtomicU64,
    insert_issued: AtomicU64,
    delete_issued: AtomicU64,
    total_issued: AtomicU64,

    member_quota: u64,
    insert_quota: u64,
    delete_quota: u64,
    total_quota: u64,
}

impl QuotaCounters {
    /// Build quotas from the workload's exact per-kind counts.
    pub fn from_counts(counts: OpCounts) -> Self {
        Self {
            member_issued: AtomicU64::new(0),
            insert_issued: AtomicU64::new(0),
            delete_issued: AtomicU64::new(0),
            total_issued: AtomicU64::new(0),
            member_quota: counts.member as u64,
            insert_quota: counts.insert as u64,
            delete_quota: counts.delete as u64,
            total_quota: counts.total() as u64,
        }
    }

    /// Claim one unit of work of the given kind.
    ///
    /// Returns false when that kind's quota is exhausted; the caller redraws
    /// a kind and tries again.
    #[inline]
    pub fn claim(&self, kind: OpKind) -> bool {
        let (issued, quota) = match kind {
            OpKind::Member => (&self.member_issued, self.member_quota),
            OpKind::Insert => (&self.insert_issued, self.insert_quota),
            OpKind::Delete => (&self.delete_issued, self.delete_quota),
        };

        let n = issued.fetch_add(1, Ordering::Relaxed);
        if n >= quota {
            // Undo the claim
            issued.fetch_sub(1, Ordering::Relaxed);
            false
        } else {
            self.total_issued.fetch_add(1, Ordering::Relaxed);
            true
        }
    }

    /// Whether every unit of work has been claimed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.total_issued.load(Ordering::Relaxed) >= self.total_quota
    }

    /// Successfully claimed units per kind (member, insert, delete).
    pub fn issued(&self) -> (u64, u64, u64) {
        (
            self.member_issued.load(Ordering::Relaxed),
            self.insert_issued.load(Ordering::Relaxed),
            self.delete_issued.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn counters(member: usize, insert: usize, delete: usize) -> QuotaCounters {
        QuotaCounters::from_counts(OpCounts {
            member,
            insert,
            delete,
        })
    }

    #[test]
    fn claims_respect_the_quota() {
        let quotas = counters(2, 1, 0);

        assert!(quotas.claim(OpKind::Member));
        assert!(quotas.claim(OpKind::Member));
        assert!(!quotas.claim(OpKind::Member));

        assert!(quotas.claim(OpKind::Insert));
        assert!(!quotas.claim(OpKind::Insert));

        assert!(!quotas.claim(OpKind::Delete));

        assert!(quotas.is_complete());
        assert_eq!(quotas.issued(), (2, 1, 0));
    }

    #[test]
    fn empty_quota_is_immediately_complete() {
        let quotas = counters(0, 0, 0);
        assert!(quotas.is_complete());
    }

    #[test]
    fn concurrent_claims_are_exact() {
        let quotas = Arc::new(counters(500, 250, 250));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let quotas = Arc::clone(&quotas);
                thread::spawn(move || {
                    let mut claimed = 0u64;
                    while !quotas.is_complete() {
                        for kind in OpKind::ALL {
                            if quotas.claim(kind) {
                                claimed += 1;
                            }
                        }
                    }
                    claimed
                })
            })
            .collect();

        let total: u64 = handles
            .into_iter()
            .map(|h| h.join().expect("claimer thread panicked"))
            .sum();

        assert_eq!(total, 1_000);
        assert_eq!(quotas.issued(), (500, 250, 250));
    }
}
