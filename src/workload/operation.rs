//! Operation model
//!
//! Keys are `u16` on purpose: the benchmark's key space is [0, 65535], so the
//! type carries the range invariant and a uniform draw over `u16` is exactly
//! the uniform draw over the key space.

use rand::Rng;

/// Number of distinct keys in the key space.
pub const KEY_SPACE: usize = 1 << 16;

/// The three operation kinds applied to the shared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Membership lookup.
    Member,
    /// Add a key (no-op on duplicates).
    Insert,
    /// Remove a key (no-op when absent).
    Delete,
}

impl OpKind {
    /// All kinds, in workload-spec order (member, insert, delete).
    pub const ALL: [OpKind; 3] = [OpKind::Member, OpKind::Insert, OpKind::Delete];
}

/// One entry of the generated workload: a kind plus the key to apply it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub kind: OpKind,
    pub key: u16,
}

/// Draw a key uniformly from the full key space.
#[inline]
pub fn random_key<R: Rng>(rng: &mut R) -> u16 {
    rng.gen()
}
