//! Workload generation
//!
//! A workload is a fixed-length shuffled sequence of typed operations with
//! uniformly random keys. Counts per kind are exact for a given spec; order
//! and keys depend only on the RNG passed in, so a seeded RNG reproduces the
//! sequence bit for bit.

use rand::seq::SliceRandom;
use rand::Rng;

use super::operation::{random_key, OpKind, Operation};

/// Target shape of a workload: total length and the desired operation mix.
///
/// Fractions need not sum exactly to 1; any rounding shortfall is assigned to
/// the member category so the sequence always has exactly `total` entries.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadSpec {
    pub total: usize,
    pub member_frac: f64,
    pub insert_frac: f64,
    pub delete_frac: f64,
}

/// Exact per-kind operation counts derived from a [`WorkloadSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCounts {
    pub member: usize,
    pub insert: usize,
    pub delete: usize,
}

impl OpCounts {
    pub fn total(&self) -> usize {
        self.member + self.insert + self.delete
    }

    /// Target count for one kind.
    pub fn for_kind(&self, kind: OpKind) -> usize {
        match kind {
            OpKind::Member => self.member,
            OpKind::Insert => self.insert,
            OpKind::Delete => self.delete,
        }
    }
}

impl WorkloadSpec {
    /// Integer counts per kind: floors of `total * frac`, with the shortfall
    /// (if the floors undershoot `total`) added entirely to member.
    pub fn counts(&self) -> OpCounts {
        let member = (self.total as f64 * self.member_frac) as usize;
        let insert = (self.total as f64 * self.insert_frac) as usize;
        let delete = (self.total as f64 * self.delete_frac) as usize;
        let assigned = member + insert + delete;
        debug_assert!(assigned <= self.total, "fractions must sum to at most 1");
        OpCounts {
            member: member + self.total.saturating_sub(assigned),
            insert,
            delete,
        }
    }

    /// Generate the shuffled operation sequence.
    ///
    /// The type tags are laid out in blocks (member, insert, delete), every
    /// slot gets its key before any shuffling so keys cannot correlate with
    /// kind or position, and the tag order is then Fisher-Yates shuffled
    /// (`SliceRandom::shuffle`).
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Operation> {
        if self.total == 0 {
            return Vec::new();
        }
        let counts = self.counts();

        let mut kinds = Vec::with_capacity(self.total);
        for kind in OpKind::ALL {
            kinds.extend(std::iter::repeat(kind).take(counts.for_kind(kind)));
        }

        let keys: Vec<u16> = (0..self.total).map(|_| random_key(rng)).collect();

        kinds.shuffle(rng);

        kinds
            .into_iter()
            .zip(keys)
            .map(|(kind, key)| Operation { kind, key })
            .collect()
    }
}
