//! Synchronization policies guarding the shared set
//!
//! One `SharedSet` wraps the [`OrderedIntSet`] for the concurrent phase and
//! applies every operation under the discipline of the selected policy:
//!
//! - `Serial`: no locking at all; the baseline. Valid only with a single
//!   worker, which configuration validation enforces.
//! - `Mutex`: one global exclusive lock around every operation, all three
//!   kinds mutually exclusive. Maximal serialization.
//! - `RwLock`: shared lock for lookups, exclusive lock for mutations, so
//!   concurrent lookups can proceed in parallel.
//!
//! Locks are acquired and released per operation, never held across two of
//! them, so contention during the run stays representative of the workload.
//! Reader/writer priority under `RwLock` is whatever `parking_lot` provides
//! (task-fair); it is deliberately not configured further.

use std::cell::UnsafeCell;

use parking_lot::{Mutex, RwLock};

use crate::config::PolicyKind;
use crate::set::OrderedIntSet;
use crate::workload::{OpKind, Operation};

/// Unsynchronized cell for the serial baseline.
///
/// The runner guarantees a `Serial` set is only ever driven by one worker at
/// a time (`BenchmarkConfig::from_cli` rejects the serial policy with more
/// than one thread), and inspects it only after that worker has joined.
pub struct SerialCell(UnsafeCell<OrderedIntSet>);

// SAFETY: access is confined to a single worker thread at a time by the
// configuration contract above; there is no concurrent access to the cell.
unsafe impl Sync for SerialCell {}

/// The shared ordered set plus the synchronization discipline guarding it.
pub enum SharedSet {
    Serial(SerialCell),
    Mutex(Mutex<OrderedIntSet>),
    RwLock(RwLock<OrderedIntSet>),
}

impl SharedSet {
    /// Wrap a populated set in the given policy.
    pub fn new(policy: PolicyKind, set: OrderedIntSet) -> Self {
        match policy {
            PolicyKind::Serial => SharedSet::Serial(SerialCell(UnsafeCell::new(set))),
            PolicyKind::Mutex => SharedSet::Mutex(Mutex::new(set)),
            PolicyKind::Rwlock => SharedSet::RwLock(RwLock::new(set)),
        }
    }

    /// Apply one operation under the policy's locking discipline.
    ///
    /// Returns the boolean the underlying set operation produced (hit for
    /// Member, success for Insert/Delete). The benchmark only tallies it,
    /// but computing it is part of the measured work.
    #[inline]
    pub fn apply(&self, op: Operation) -> bool {
        match self {
            SharedSet::Serial(cell) => {
                // SAFETY: single-worker contract of `SerialCell`.
                let set = unsafe { &mut *cell.0.get() };
                apply_to(set, op)
            }
            SharedSet::Mutex(lock) => apply_to(&mut lock.lock(), op),
            SharedSet::RwLock(lock) => match op.kind {
                OpKind::Member => lock.read().contains(op.key),
                OpKind::Insert => lock.write().insert(op.key),
                OpKind::Delete => lock.write().remove(op.key),
            },
        }
    }

    /// Current set size. Only meaningful while no worker is running.
    pub fn len(&self) -> usize {
        match self {
            // SAFETY: callers only inspect a Serial set outside the
            // concurrent phase.
            SharedSet::Serial(cell) => unsafe { &*cell.0.get() }.len(),
            SharedSet::Mutex(lock) => lock.lock().len(),
            SharedSet::RwLock(lock) => lock.read().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Recover the set after all workers have joined.
    pub fn into_inner(self) -> OrderedIntSet {
        match self {
            SharedSet::Serial(cell) => cell.0.into_inner(),
            SharedSet::Mutex(lock) => lock.into_inner(),
            SharedSet::RwLock(lock) => lock.into_inner(),
        }
    }
}

#[inline]
fn apply_to(set: &mut OrderedIntSet, op: Operation) -> bool {
    match op.kind {
        OpKind::Member => set.contains(op.key),
        OpKind::Insert => set.insert(op.key),
        OpKind::Delete => set.remove(op.key),
    }
}
