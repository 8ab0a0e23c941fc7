//! Sorted singly-linked integer set
//!
//! The set is a plain ordered chain: the set owns the first node, each node
//! owns its successor. Keys are strictly increasing along the chain and never
//! duplicated. The structure performs no locking of its own; concurrent
//! access must be synchronized by the caller (see `crate::sync`).

type Link = Option<Box<Node>>;

struct Node {
    key: u16,
    next: Link,
}

/// Ordered, duplicate-free set of `u16` keys backed by a singly-linked chain.
#[derive(Default)]
pub struct OrderedIntSet {
    head: Link,
}

impl OrderedIntSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// Check whether `key` is present.
    ///
    /// Exploits sortedness: the walk stops as soon as the current key is no
    /// longer below the query key, so misses exit early on average.
    pub fn contains(&self, key: u16) -> bool {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key < key {
                cur = node.next.as_deref();
            } else {
                return node.key == key;
            }
        }
        false
    }

    /// Insert `key`, keeping the chain sorted.
    ///
    /// Returns `false` without modifying the set when the key is already
    /// present.
    pub fn insert(&mut self, key: u16) -> bool {
        let link = self.seek(key);
        if link.as_ref().is_some_and(|node| node.key == key) {
            return false;
        }
        let next = link.take();
        *link = Some(Box::new(Node { key, next }));
        true
    }

    /// Remove `key` if present, returning whether a node was unlinked.
    pub fn remove(&mut self, key: u16) -> bool {
        let link = self.seek(key);
        if link.as_ref().is_some_and(|node| node.key == key) {
            let node = link.take().expect("checked above");
            *link = node.next;
            true
        } else {
            false
        }
    }

    /// Number of keys in the set. Full traversal.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Release every node and reset to empty.
    ///
    /// Iterative so that dropping a long chain cannot overflow the stack.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// In-order iterator over the keys.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Advance to the first link whose node key is >= `key` (or the trailing
    /// empty link). The returned link is the splice/unlink point for `key`.
    fn seek(&mut self, key: u16) -> &mut Link {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| node.key < key) {
            link = &mut link.as_mut().expect("checked above").next;
        }
        link
    }
}

impl Drop for OrderedIntSet {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Borrowed in-order traversal of an [`OrderedIntSet`].
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_sorted_unique(set: &OrderedIntSet) {
        let keys: Vec<u16> = set.iter().collect();
        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1], "chain out of order: {:?}", pair);
        }
    }

    #[test]
    fn insert_keeps_sorted_order() {
        let mut set = OrderedIntSet::new();
        for key in [40u16, 10, 30, 20, 50, 0] {
            assert!(set.insert(key));
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 10, 20, 30, 40, 50]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = OrderedIntSet::new();
        assert!(set.insert(7));
        assert!(!set.insert(7));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = OrderedIntSet::new();
        set.insert(7);
        assert!(set.remove(7));
        assert!(!set.remove(7));
        assert!(set.is_empty());
    }

    #[test]
    fn insert_then_contains_round_trip() {
        let mut set = OrderedIntSet::new();
        assert!(set.insert(123));
        assert!(set.contains(123));
        assert!(set.remove(123));
        assert!(!set.contains(123));
    }

    #[test]
    fn contains_early_exit_on_smaller_key() {
        let mut set = OrderedIntSet::new();
        set.insert(100);
        set.insert(200);
        // 50 sorts before the head, 150 between the two nodes.
        assert!(!set.contains(50));
        assert!(!set.contains(150));
        assert!(!set.contains(300));
    }

    #[test]
    fn remove_head_and_interior() {
        let mut set = OrderedIntSet::new();
        for key in [1u16, 2, 3] {
            set.insert(key);
        }
        assert!(set.remove(1));
        assert!(set.remove(3));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut set = OrderedIntSet::new();
        for key in 0..100u16 {
            set.insert(key);
        }
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn invariant_holds_under_random_mutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut set = OrderedIntSet::new();
        let mut model = std::collections::BTreeSet::new();
        for _ in 0..10_000 {
            let key: u16 = rng.gen_range(0..512);
            match rng.gen_range(0..3) {
                0 => assert_eq!(set.contains(key), model.contains(&key)),
                1 => assert_eq!(set.insert(key), model.insert(key)),
                _ => assert_eq!(set.remove(key), model.remove(&key)),
            }
        }
        assert_sorted_unique(&set);
        assert_eq!(set.iter().collect::<Vec<_>>(), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn long_chain_drops_without_overflow() {
        let mut set = OrderedIntSet::new();
        // Descending insertion order makes every insert a head splice.
        for key in (0..=u16::MAX).rev() {
            set.insert(key);
        }
        assert_eq!(set.len(), 65_536);
        drop(set);
    }
}
